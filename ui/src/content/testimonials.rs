use super::ImageRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialEntry {
    pub id: u32,
    pub author: &'static str,
    pub quote: &'static str,
    pub avatar: ImageRef,
}

pub const TESTIMONIALS: &[TestimonialEntry] = &[
    TestimonialEntry {
        id: 1,
        author: "Paolo Gutlay",
        quote: "\"Excellent quality! Fresh beans and quick delivery. Highly recommend.\"",
        avatar: ImageRef("user1.jpg"),
    },
    TestimonialEntry {
        id: 2,
        author: "Wilbert Duque",
        quote: "\"Best decaf I've tried! Smooth and flavorful. Arrived promptly.\"",
        avatar: ImageRef("user2.jpg"),
    },
    TestimonialEntry {
        id: 3,
        author: "JanJan Dayta",
        quote: "\"Fantastic mocha flavor. Fresh and aromatic. Quick shipping!\"",
        avatar: ImageRef("user3.jpeg"),
    },
    TestimonialEntry {
        id: 4,
        author: "Jhon Mark Candia",
        quote: "\"Loved the French roast. Perfectly balanced and rich. Will order again!\"",
        avatar: ImageRef("user4.jpg"),
    },
    TestimonialEntry {
        id: 5,
        author: "Danniel Canary Quipia",
        quote: "\"Great espresso blend! Smooth and bold flavor. Fast shipping too!\"",
        avatar: ImageRef("user5.jpg"),
    },
    TestimonialEntry {
        id: 6,
        author: "Reynaldo Porteros",
        quote: "\"Impressed with the variety! Each blend has its own unique taste. Highly recommend!\"",
        avatar: ImageRef("user6.jpg"),
    },
];
