//! The simulated catalog and user profiles backing the demo.
//!
//! Both tables are fixed at process start; nothing in the crate mutates
//! them. User sessions copy a profile's behavior and grow it locally.

use lazy_static::lazy_static;

use crate::{
    behavior::{UserBehavior, UserProfile},
    catalog::{Catalog, Category, Product, ProductId},
};

lazy_static! {
    /// The demo product catalog.
    pub static ref CATALOG: Catalog = catalog();
    /// The simulated demo users.
    pub static ref USER_PROFILES: Vec<UserProfile> = user_profiles();
}

/// Looks up a demo profile by its id, e.g. `user_tech`.
pub fn find_profile(id: &str) -> Option<&'static UserProfile> {
    USER_PROFILES.iter().find(|profile| profile.id == id)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: Category,
    price: f32,
    rating: f32,
    tags: &[&str],
    description: &str,
    popularity: f32,
    specs: &[&str],
    reviews: u32,
) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        category,
        price,
        rating,
        tags: tags.iter().map(|tag| (*tag).into()).collect(),
        description: description.into(),
        popularity,
        specs: specs.iter().map(|spec| (*spec).into()).collect(),
        reviews,
    }
}

fn catalog() -> Catalog {
    use Category::*;

    Catalog::new(vec![
        product(
            1,
            "Premium Wireless Headphones",
            Electronics,
            299.,
            4.8,
            &["audio", "wireless", "premium"],
            "Noise-cancelling with 30hr battery",
            95.,
            &[
                "Active Noise Cancellation",
                "30h Battery",
                "Bluetooth 5.0",
                "Hi-Res Audio",
            ],
            2543,
        ),
        product(
            2,
            "Smart Fitness Watch",
            Wearables,
            249.,
            4.6,
            &["fitness", "smart", "health"],
            "Track your health metrics 24/7",
            88.,
            &["Heart Rate Monitor", "GPS", "Water Resistant", "7 Day Battery"],
            1856,
        ),
        product(
            3,
            "4K Action Camera",
            Electronics,
            399.,
            4.7,
            &["camera", "sports", "4k"],
            "Waterproof adventure companion",
            82.,
            &["4K 60fps", "Waterproof 30m", "Stabilization", "Voice Control"],
            1234,
        ),
        product(
            4,
            "Ergonomic Office Chair",
            Furniture,
            449.,
            4.9,
            &["office", "ergonomic", "comfort"],
            "All-day comfort for professionals",
            91.,
            &[
                "Lumbar Support",
                "Armrest Adjust",
                "Breathable Mesh",
                "5 Year Warranty",
            ],
            3421,
        ),
        product(
            5,
            "Smart Coffee Maker",
            Appliances,
            179.,
            4.5,
            &["coffee", "smart", "kitchen"],
            "Brew from your smartphone",
            76.,
            &[
                "WiFi Connected",
                "Programmable",
                "12 Cup Capacity",
                "Thermal Carafe",
            ],
            892,
        ),
        product(
            6,
            "Mechanical Keyboard RGB",
            Electronics,
            159.,
            4.7,
            &["gaming", "keyboard", "rgb"],
            "Cherry MX switches with RGB",
            85.,
            &[
                "Cherry MX Switches",
                "RGB Lighting",
                "Aluminum Frame",
                "Programmable",
            ],
            2156,
        ),
        product(
            7,
            "Yoga Mat Premium",
            Sports,
            79.,
            4.4,
            &["fitness", "yoga", "wellness"],
            "Eco-friendly non-slip mat",
            70.,
            &[
                "Non-slip Surface",
                "6mm Thickness",
                "Eco TPE",
                "Carrying Strap",
            ],
            1023,
        ),
        product(
            8,
            "Wireless Charging Pad",
            Electronics,
            49.,
            4.3,
            &["wireless", "charging", "tech"],
            "Fast charge any Qi device",
            68.,
            &[
                "15W Fast Charging",
                "Qi Compatible",
                "LED Indicator",
                "Non-slip Base",
            ],
            756,
        ),
        product(
            9,
            "Designer Backpack",
            Fashion,
            129.,
            4.6,
            &["fashion", "travel", "urban"],
            "Water-resistant laptop compartment",
            79.,
            &[
                "Laptop Pocket",
                "Water Resistant",
                "USB Charging Port",
                "TSA Friendly",
            ],
            1456,
        ),
        product(
            10,
            "Air Purifier HEPA",
            Appliances,
            299.,
            4.8,
            &["health", "air", "home"],
            "Remove 99.97% of pollutants",
            84.,
            &[
                "HEPA Filter",
                "Smart Control",
                "Coverage 500 sqft",
                "3 Speed Modes",
            ],
            2789,
        ),
    ])
}

fn profile(
    id: &str,
    name: &str,
    viewed: &[u32],
    purchased: &[u32],
    recent_views: &[Category],
) -> UserProfile {
    UserProfile {
        id: id.into(),
        name: name.into(),
        behavior: UserBehavior::new(
            viewed.iter().copied().map(ProductId::from).collect(),
            purchased.iter().copied().map(ProductId::from).collect(),
            recent_views.to_vec(),
        ),
    }
}

fn user_profiles() -> Vec<UserProfile> {
    use Category::*;

    vec![
        profile(
            "user_tech",
            "Tech Enthusiast",
            &[1, 6, 8, 3],
            &[1, 6],
            &[Electronics],
        ),
        profile(
            "user_fitness",
            "Fitness Lover",
            &[7, 10, 4, 5],
            &[],
            &[Wearables, Sports, Appliances],
        ),
        profile(
            "user_office",
            "Office Professional",
            &[4, 6, 9, 1],
            &[4, 9],
            &[Furniture, Electronics, Fashion],
        ),
        profile(
            "user_home",
            "Home Organizer",
            &[10, 5, 4, 9],
            &[10, 5],
            &[Appliances, Furniture, Fashion],
        ),
        profile(
            "user_explorer",
            "Adventure Seeker",
            &[3, 9, 2, 7],
            &[3, 9],
            &[Electronics, Sports, Fashion],
        ),
    ]
}
