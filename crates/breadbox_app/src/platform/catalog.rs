//! The bakery's recipe-card catalog, as shipped on the recipes page.

use breadbox_core::CardSpec;

pub(crate) fn demo_cards() -> Vec<CardSpec> {
    [
        ("Dark Chocolate Cake", "cake chocolate dessert rich"),
        ("Vanilla Blueberry Cake", "cake vanilla blueberry fruit"),
        ("Banana Cake", "cake banana"),
        ("Carrot Cake", "cake carrot spice"),
        ("Lychee Basque", "cheesecake basque lychee"),
        ("Japanese Pancakes", "pancakes fluffy breakfast"),
        ("Apple Cake", "cake apple cinnamon"),
        ("Orange Olive Oil Cake", "cake orange olive oil citrus"),
        ("Date Cake", "cake date sticky"),
        ("Matcha Cookies", "cookies matcha green tea"),
        ("Red Velvet Cookies", "cookies red velvet"),
        ("Blueberry Macarons", "macarons blueberry french"),
        ("Lemon Bars", "bars lemon tangy"),
        ("Pumpkin Chai Cookies", "cookies pumpkin chai autumn"),
        ("Gingerbread Cookies", "cookies gingerbread holiday"),
        ("Apple Pie", "pie apple dessert sweet"),
        ("Hazelnut Chocolate Cupcakes", "cupcakes hazelnut chocolate"),
        ("Pecan Pie", "pie pecan nutty"),
        ("Pear Oat Pie", "pie pear oat"),
        ("Brioche", "bread brioche butter"),
        ("Cinnamon Rolls", "bread rolls cinnamon sweet"),
        ("Blueberry Lemon Sourdough", "bread sourdough blueberry lemon"),
        ("Olive Oil Focaccia", "bread focaccia olive oil savory"),
        ("Chocolate Croissants", "pastry croissants chocolate"),
        ("Raspberry Ice Cream Sandwich", "ice cream sandwich raspberry"),
    ]
    .into_iter()
    .map(|(title, keywords)| CardSpec::new(title, keywords))
    .collect()
}
