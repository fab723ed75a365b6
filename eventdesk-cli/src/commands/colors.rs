use eventdesk_core::palette::Color;

use crate::render::Render;

pub fn run() {
    for color in Color::ALL {
        println!("{}", color.render());
    }
}
