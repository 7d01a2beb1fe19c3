//! The built-in menu.
//!
//! Constructed at startup from fixed data; a deployment that sources its
//! catalog elsewhere can build a [`Catalog`] through the public constructors
//! instead.

use rust_decimal::Decimal;
use smallvec::smallvec;

use super::{Catalog, CatalogItem, Category, ItemId, ShopContact, ShopInfo};

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    unit: &str,
    image: &str,
) -> CatalogItem {
    CatalogItem {
        id: ItemId::from(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        unit: unit.to_owned(),
        images: smallvec![image.to_owned()],
        rating: None,
        total_reviews: None,
    }
}

fn rated(mut base: CatalogItem, rating: Decimal, total_reviews: u32) -> CatalogItem {
    base.rating = Some(rating);
    base.total_reviews = Some(total_reviews);
    base
}

fn chivda() -> Category {
    Category {
        id: "chivda".to_owned(),
        name: "Chivda Collection".to_owned(),
        description: "Crispy and flavorful traditional snacks perfect for Diwali celebrations"
            .to_owned(),
        icon: "🥜".to_owned(),
        items: vec![
            rated(
                item(
                    "poha-chivda",
                    "Poha Chivda",
                    "Traditional flattened rice mixture with spices and peanuts",
                    600,
                    "per kg",
                    "https://images.unsplash.com/photo-1633975573517-653b02dcae4f",
                ),
                Decimal::new(48, 1),
                36,
            ),
            item(
                "corn-chivda-plain",
                "Corn Chivda - Plain",
                "Crunchy corn flakes seasoned with aromatic spices",
                650,
                "per kg",
                "https://images.unsplash.com/photo-1575526854473-e85fdba07b7a",
            ),
            item(
                "corn-chivda-dry-fruits",
                "Corn Chivda - With Dry Fruits",
                "Premium corn chivda enriched with almonds, cashews and raisins",
                750,
                "per kg",
                "https://images.unsplash.com/photo-1589786742305-f24d19eedbe5",
            ),
            item(
                "farali-chivda",
                "Farali Chivda",
                "Special fasting-friendly mixture with sabudana and peanuts",
                760,
                "per kg",
                "https://images.unsplash.com/photo-1627035537702-ddca174d7987",
            ),
            item(
                "makhana-chivda-masala",
                "Makhana Chivda - Masala",
                "Roasted lotus seeds with aromatic spices and herbs",
                1600,
                "per kg",
                "https://images.unsplash.com/photo-1599599810769-bcde5a160d32",
            ),
            item(
                "makhana-chivda-dry-fruits",
                "Makhana Chivda - Masala & Dry Fruits",
                "Premium makhana with masala spices and assorted dry fruits",
                1850,
                "per kg",
                "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b",
            ),
            item(
                "kurmura-chivda",
                "Kurmura Chivda",
                "Light and crispy puffed rice mixture with curry leaves",
                500,
                "per kg",
                "https://images.unsplash.com/photo-1606491956689-2ea866880c84",
            ),
            item(
                "fried-poha-chivda",
                "Fried Poha Chivda",
                "Perfectly fried flattened rice with onions and spices",
                550,
                "per kg",
                "https://images.unsplash.com/photo-1589556165541-4254aa9cfb39",
            ),
        ],
    }
}

fn chakli() -> Category {
    Category {
        id: "chakli".to_owned(),
        name: "Chakli Varieties".to_owned(),
        description: "Spiral-shaped crispy delights made from different grains".to_owned(),
        icon: "🌀".to_owned(),
        items: vec![
            rated(
                item(
                    "rice-chakli",
                    "Rice Chakli",
                    "Classic spiral-shaped snack made from rice flour and spices",
                    625,
                    "per kg",
                    "https://images.pexels.com/photos/9832636/pexels-photo-9832636.jpeg",
                ),
                Decimal::new(46, 1),
                21,
            ),
            item(
                "bhajni-chakli",
                "Bhajni Chakli",
                "Traditional Maharashtrian chakli with mixed lentil flour",
                700,
                "per kg",
                "https://images.pexels.com/photos/5992272/pexels-photo-5992272.jpeg",
            ),
            item(
                "jowari-chakli",
                "Jowari Chakli",
                "Healthy chakli made from sorghum flour with authentic taste",
                650,
                "per kg",
                "https://images.unsplash.com/photo-1621245725986-d794ddc5da5a",
            ),
        ],
    }
}

fn savory() -> Category {
    Category {
        id: "savory".to_owned(),
        name: "Savory Delights".to_owned(),
        description: "Assorted crispy and flavorful traditional snacks".to_owned(),
        icon: "🥨".to_owned(),
        items: vec![
            item(
                "farsi-puri",
                "Farsi Puri",
                "Delicate and crispy deep-fried bread perfect for snacking",
                550,
                "per kg",
                "https://images.unsplash.com/photo-1578662996442-48f60103fc96",
            ),
            item(
                "ribbon-pakoda",
                "Ribbon Pakoda",
                "Crunchy ribbon-shaped fritters with aromatic spices",
                525,
                "per kg",
                "https://images.unsplash.com/photo-1601050690597-df0568f70950",
            ),
            item(
                "thika-sev",
                "Thika Sev",
                "Fine and crispy gram flour noodles with perfect seasoning",
                540,
                "per kg",
                "https://images.unsplash.com/photo-1613764816537-a43baeb559c1",
            ),
            item(
                "mathri",
                "Mathri",
                "Flaky and crispy traditional biscuits with ajwain",
                650,
                "per kg",
                "https://images.unsplash.com/photo-1603554593710-89285666b691",
            ),
            item(
                "thika-shankarpala",
                "Thika Shankarpala",
                "Diamond-shaped crispy snacks with subtle spice blend",
                625,
                "per kg",
                "https://images.unsplash.com/photo-1627035537727-96e5d592bbb6",
            ),
            item(
                "sweet-shankarpala",
                "Sweet Shankarpala",
                "Sweet version of traditional shankarpala with jaggery",
                675,
                "per kg",
                "https://images.unsplash.com/photo-1571115764595-644a1f56a55c",
            ),
        ],
    }
}

fn sweets() -> Category {
    Category {
        id: "sweets".to_owned(),
        name: "Festival Sweets".to_owned(),
        description: "Traditional sweets to make your Diwali celebrations memorable".to_owned(),
        icon: "🍰".to_owned(),
        items: vec![
            item(
                "gujjia",
                "Gujjia",
                "Crescent-shaped pastry filled with khoya and dry fruits",
                35,
                "per piece",
                "https://images.unsplash.com/photo-1589786742305-f24d19eedbe5",
            ),
            item(
                "karanji",
                "Saada Karanji",
                "Traditional Maharashtrian sweet dumpling with coconut filling",
                28,
                "per piece",
                "https://images.unsplash.com/photo-1605195340000-86f7b6c4f3c1",
            ),
        ],
    }
}

fn laddus() -> Category {
    Category {
        id: "laddus".to_owned(),
        name: "Laddu Collection".to_owned(),
        description: "Round balls of sweetness in various flavors".to_owned(),
        icon: "⚫".to_owned(),
        items: vec![
            rated(
                item(
                    "besan-laddu",
                    "Besan Laddu",
                    "Classic gram flour laddus with ghee and cardamom",
                    1050,
                    "per kg",
                    "https://images.unsplash.com/photo-1589556165541-4254aa9cfb39",
                ),
                Decimal::new(49, 1),
                54,
            ),
            item(
                "rava-besan",
                "Rava-Besan Laddu",
                "Combination of semolina and gram flour in sweet balls",
                800,
                "per kg",
                "https://images.unsplash.com/photo-1590080875515-8a3a8dc5735e",
            ),
            item(
                "rava-coconut",
                "Rava-Coconut Laddu",
                "Semolina laddus with fresh coconut and cardamom",
                750,
                "per kg",
                "https://images.unsplash.com/photo-1606491956689-2ea866880c84",
            ),
            item(
                "rava-plain",
                "Rava-Plain Laddu",
                "Simple and delicious semolina laddus",
                675,
                "per kg",
                "https://images.unsplash.com/photo-1571115764595-644a1f56a55c",
            ),
        ],
    }
}

/// The full built-in menu.
#[must_use]
pub fn builtin() -> Catalog {
    Catalog::new(vec![chivda(), chakli(), savory(), sweets(), laddus()])
}

/// The storefront identity shown in headers, footers and order messages.
#[must_use]
pub fn shop_info() -> ShopInfo {
    ShopInfo {
        name: "Aparna's Diwali Delights".to_owned(),
        tagline: "Traditional Sweets & Snacks for Your Festival Celebrations".to_owned(),
        description:
            "Authentic homemade delicacies crafted with love by Aparna for your Diwali festivities"
                .to_owned(),
        contact: ShopContact {
            phone: "+91 98200 11223".to_owned(),
            email: "orders@aparnasdelights.in".to_owned(),
            address: "Borivali (W), Mumbai, Maharashtra".to_owned(),
            fssai_license: "21521058000362".to_owned(),
        },
    }
}
