//! Closed value domains for every ball and zodiac attribute.
//!
//! The canonical labels double as the filter keys (`RED`, `odd`, `big`, ...),
//! so they must stay stable.

labelled_enum! {
    /// Wave color (波色).
    Color as "color" {
        Red => "RED" | "红" | "红波",
        Blue => "BLUE" | "蓝" | "蓝波",
        Green => "GREEN" | "绿" | "绿波",
    }
}

labelled_enum! {
    /// Five elements (五行).
    Element as "element" {
        Gold => "金" | "gold" | "metal",
        Wood => "木" | "wood",
        Water => "水" | "water",
        Fire => "火" | "fire",
        Earth => "土" | "earth",
    }
}

labelled_enum! {
    Parity as "parity" {
        Odd => "odd" | "单",
        Even => "even" | "双",
    }
}

labelled_enum! {
    Size as "size" {
        Big => "big" | "大",
        Small => "small" | "小",
    }
}

labelled_enum! {
    SkyGround as "sky/ground" {
        Sky => "sky" | "天",
        Ground => "ground" | "地",
    }
}

labelled_enum! {
    DomesticWild as "domestic/wild" {
        Domestic => "domestic" | "家" | "家禽",
        Wild => "wild" | "野" | "野兽",
    }
}

labelled_enum! {
    YinYang as "yin/yang" {
        Yin => "yin" | "阴",
        Yang => "yang" | "阳",
    }
}

labelled_enum! {
    FrontBack as "front/back" {
        Front => "front" | "前",
        Back => "back" | "后",
    }
}

labelled_enum! {
    Luck as "luck" {
        Lucky => "lucky" | "吉",
        Unlucky => "unlucky" | "凶",
    }
}

impl Parity {
    pub fn of(value: u8) -> Self {
        if value % 2 != 0 { Parity::Odd } else { Parity::Even }
    }
}

impl Size {
    /// `Big` when `value >= threshold`.
    pub fn split_at(value: u8, threshold: u8) -> Self {
        if value >= threshold { Size::Big } else { Size::Small }
    }
}

impl Color {
    /// Chinese name shown next to the ball.
    pub fn wave_name(self) -> &'static str {
        match self {
            Color::Red => "红波",
            Color::Blue => "蓝波",
            Color::Green => "绿波",
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
