use super::ImageRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub image: ImageRef,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        id: 1,
        image: ImageRef("gallery-1.jpg"),
        alt: "Kopi gallery photo 1",
    },
    GalleryImage {
        id: 2,
        image: ImageRef("gallery-2.jpg"),
        alt: "Kopi gallery photo 2",
    },
    GalleryImage {
        id: 3,
        image: ImageRef("gallery-3.jpg"),
        alt: "Kopi gallery photo 3",
    },
    GalleryImage {
        id: 4,
        image: ImageRef("gallery-4.jpg"),
        alt: "Kopi gallery photo 4",
    },
    GalleryImage {
        id: 5,
        image: ImageRef("gallery-5.jpg"),
        alt: "Kopi gallery photo 5",
    },
    GalleryImage {
        id: 6,
        image: ImageRef("gallery-6.jpg"),
        alt: "Kopi gallery photo 6",
    },
];
