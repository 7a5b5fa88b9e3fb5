use crate::models::domain::Product;

/// Sample catalog as (name, tags) rows
pub const SAMPLE_PRODUCTS: &[(&str, &[&str])] = &[
    ("Eco Water Bottle", &["eco-friendly", "durable", "recyclable"]),
    ("Trail Backpack", &["durable", "water-resistant", "lightweight"]),
    ("Vegan Leather Wallet", &["vegan", "stylish", "compact"]),
    ("Bamboo Toothbrush", &["eco-friendly", "vegan", "biodegradable"]),
    ("Smartwatch", &["tech", "durable", "stylish"]),
    ("Running Shoes", &["lightweight", "durable", "stylish"]),
    ("Solar Charger", &["eco-friendly", "tech", "portable"]),
];

/// Build the sample catalog in table order
pub fn sample_catalog() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|(name, tags)| Product::new(*name, tags.iter().copied()))
        .collect()
}
