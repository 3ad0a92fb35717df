//! 样例目录：在后端列表到达之前（或无法到达时）显示

use mithai_shared::{NewProduct, Product};

const SAMPLE_SWEETS: [(i64, &str, &str, f64, u32, &str, &str); 8] = [
    (
        1,
        "Kaju Katli",
        "Traditional",
        450.0,
        25,
        "Premium cashew sweet",
        "https://i.ibb.co/2m1pkp9/Gemini-Generated-Image-e67wwle67wwle67w.png",
    ),
    (
        2,
        "Motichoor Ladoo",
        "Traditional",
        380.0,
        30,
        "Traditional gram flour sweet",
        "https://i.ibb.co/bgZ4KrRJ/Gemini-Generated-Image-89bygb89bygb89by.png",
    ),
    (
        3,
        "Gulab Jamun",
        "Traditional",
        320.0,
        40,
        "Soft milk solid balls in sugar syrup",
        "https://i.ibb.co/hv82nNz/Gemini-Generated-Image-1jbp1s1jbp1s1jbp.png",
    ),
    (
        4,
        "Soan Papdi",
        "Traditional",
        280.0,
        35,
        "Flaky, crispy sweet",
        "https://i.ibb.co/392Jc0Pp/Gemini-Generated-Image-7twmr07twmr07twm.png",
    ),
    (
        5,
        "Rasgulla",
        "Traditional",
        300.0,
        28,
        "Soft cottage cheese balls in syrup",
        "https://i.ibb.co/Pv4Wt9Hd/Gemini-Generated-Image-v2bwzqv2bwzqv2bw.png",
    ),
    (
        6,
        "Barfi Mix",
        "Traditional",
        420.0,
        20,
        "Assorted milk-based sweets",
        "https://i.ibb.co/pjQH0kHj/Gemini-Generated-Image-8vqmot8vqmot8vqm.png",
    ),
    (
        7,
        "Chocolate Barfi",
        "Fusion",
        480.0,
        22,
        "Modern twist on traditional barfi",
        "https://i.ibb.co/spZgC0GW/Gemini-Generated-Image-p8bxx5p8bxx5p8bx.png",
    ),
    (
        8,
        "Dry Fruit Mix",
        "Dry Fruits",
        650.0,
        15,
        "Premium selection of dry fruits",
        "https://i.ibb.co/jk5LkCy9/Gemini-Generated-Image-qguuyiqguuyiqguu.png",
    ),
];

pub fn sample_catalog() -> Vec<Product> {
    SAMPLE_SWEETS
        .iter()
        .map(|&(id, name, category, price, stock, description, image)| {
            Product::new(
                id,
                NewProduct {
                    name: name.to_string(),
                    category: category.to_string(),
                    price,
                    stock,
                    description: description.to_string(),
                    image_url: Some(image.to_string()),
                },
            )
        })
        .collect()
}
