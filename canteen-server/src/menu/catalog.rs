//! 固定菜单

/// (分类, [(菜品, 图片路径)])
pub const MENU: &[(&str, &[(&str, &str)])] = &[
    (
        "Snacks",
        &[
            ("Cookies", "/menu-images/cookies.png"),
            ("Chocolates", "/menu-images/chocolates.png"),
            ("Wafers", "/menu-images/wafers.png"),
            ("Chips", "/menu-images/chips.png"),
            ("Nuts", "/menu-images/nuts.png"),
            ("Dates", "/menu-images/dates.png"),
        ],
    ),
    (
        "Mains",
        &[
            ("Pasta", "/menu-images/pasta.png"),
            ("Noodles", "/menu-images/noodles.png"),
            ("Fried Rice", "/menu-images/fried_rice.png"),
            ("BBQ Chicken", "/menu-images/bbq_chicken.png"),
            ("Gobi Manchurian", "/menu-images/gobi_manchurian.png"),
            ("Chapathi", "/menu-images/chapathi.png"),
            ("Sandwich", "/menu-images/sandwich.png"),
            ("Idli", "/menu-images/idli.png"),
            ("Dosa", "/menu-images/dosa.png"),
        ],
    ),
    (
        "Drinks",
        &[
            ("Tea", "/menu-images/tea.png"),
            ("Coffee", "/menu-images/coffee.png"),
            ("Boost", "/menu-images/boost.png"),
            ("Horlicks", "/menu-images/horlicks.png"),
            ("Juice", "/menu-images/juice.png"),
            ("Water", "/menu-images/water.png"),
        ],
    ),
];
