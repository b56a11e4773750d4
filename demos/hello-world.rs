use bolay::layout::{HAlign, OneLineTextBox, TextStyle, VAlign};
use bolay::pagesize::{Orientation, PageFormat};
use bolay::{colours, Blot, Font, FontKey, PdfCanvas, Rect, Rgba, Unit};

fn main() {
    // usage: hello-world <font.ttf>
    let path = std::env::args()
        .nth(1)
        .expect("pass the path of a TTF or OTF font");
    let font = Font::load(std::fs::read(path).expect("can read font")).expect("can load font");
    let key = FontKey::new("Demo", "");

    // a document measured in inches, with one landscape letter page
    let mut canvas = PdfCanvas::new(Unit::In);
    canvas.add_font(&key, font);
    let (_, (width, height)) = canvas
        .add_page(
            "landscape".parse::<Orientation>().expect("valid orientation"),
            Some(PageFormat::Named("letter")),
        )
        .expect("letter is a known format");

    let mut blot = Blot::new(&mut canvas);

    // a one inch tall banner inside half inch page margins
    let mut banner = Rect::new(0.0, 0.0, width, height);
    banner.inset(0.5).set_height(1.0);
    let teal = Rgba::parse("teal", 255).expect("teal is a colour name");
    blot.draw_box(banner, 0.02, colours::DARK_SLATE_GREY, Some(teal.resaturate(0.5, 0.0, 1.2, 0.0)))
        .expect("page exists");

    // the title, shrunk to fit and haloed
    let mut title: OneLineTextBox = blot
        .text_box(banner, key.clone(), 0.8, None)
        .expect("font is registered");
    let style = TextStyle::new(colours::BLACK)
        .align(HAlign::Center, VAlign::Middle)
        .shrink_to_fit()
        .halo(colours::WHITE, 0.0005);
    let occupied = blot
        .draw_text(&mut title, "Hello world! This title is much too long for its banner", &style)
        .expect("can draw text");

    // underline what the title actually covers
    let mut underline = occupied;
    underline.set_y(occupied.y_max() + 0.05).set_height(0.02);
    blot.fill_box(underline, colours::GREY).expect("page exists");

    let out = std::fs::File::create("hello-world.pdf").expect("can create file");
    canvas.write(out).expect("can write pdf");
}
