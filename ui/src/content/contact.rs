use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    MapMarker,
    Envelope,
    Phone,
    Clock,
}

impl ContactIcon {
    /// Accessible name for the icon.
    pub fn label(self) -> String {
        match self {
            ContactIcon::MapMarker => t!("contact-icon-address"),
            ContactIcon::Envelope => t!("contact-icon-email"),
            ContactIcon::Phone => t!("contact-icon-phone"),
            ContactIcon::Clock => t!("contact-icon-hours"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfoLine {
    pub id: u32,
    pub icon: ContactIcon,
    pub text: &'static str,
}

pub const CONTACT_INFO: &[ContactInfoLine] = &[
    ContactInfoLine {
        id: 1,
        icon: ContactIcon::MapMarker,
        text: "Zone 8, Bulan, Sorsogon, Philippines 4706",
    },
    ContactInfoLine {
        id: 2,
        icon: ContactIcon::Envelope,
        text: "kopigroup@gmail.com",
    },
    ContactInfoLine {
        id: 3,
        icon: ContactIcon::Phone,
        text: "(123) 456-78909",
    },
    ContactInfoLine {
        id: 4,
        icon: ContactIcon::Clock,
        text: "Monday - Friday: 9:00 AM - 5:00 PM",
    },
    ContactInfoLine {
        id: 5,
        icon: ContactIcon::Clock,
        text: "Saturday: 10:00 AM - 3:00 PM",
    },
    ContactInfoLine {
        id: 6,
        icon: ContactIcon::Clock,
        text: "Sunday: Closed",
    },
];
