use super::ImageRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: ImageRef,
    pub alt: &'static str,
}

pub const MENU_CATEGORIES: &[MenuCategory] = &[
    MenuCategory {
        id: 1,
        title: "Hot Beverages",
        description: "Wide range of Steaming hot coffee to make you fresh and light",
        image: ImageRef("hot-beverages.png"),
        alt: "Hot beverages",
    },
    MenuCategory {
        id: 2,
        title: "Cold Beverages",
        description: "Creamy and frothy cold coffee to make you cool",
        image: ImageRef("cold-beverages.png"),
        alt: "Cold beverages",
    },
    MenuCategory {
        id: 3,
        title: "Refreshment",
        description: "Fruit and icy refreshing drink to make you feel refresh",
        image: ImageRef("refreshment.png"),
        alt: "Refreshment",
    },
    MenuCategory {
        id: 4,
        title: "Special Combos",
        description: "Your favorite eating and drinking combinations",
        image: ImageRef("special-combo.png"),
        alt: "Special combo",
    },
    MenuCategory {
        id: 5,
        title: "Dessert",
        description: "Satiate your palate and take you on a culinary treat",
        image: ImageRef("desserts.png"),
        alt: "Desserts",
    },
    MenuCategory {
        id: 6,
        title: "Burger & French Fries",
        description: "Quick bites to satisfy your small size hunger",
        image: ImageRef("burger-frenchfries.png"),
        alt: "Burger frenchfries",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_categories_in_declared_order() {
        let titles: Vec<_> = MENU_CATEGORIES.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "Hot Beverages",
                "Cold Beverages",
                "Refreshment",
                "Special Combos",
                "Dessert",
                "Burger & French Fries",
            ]
        );
        let ids: Vec<_> = MENU_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }
}
