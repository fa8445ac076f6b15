// Minimal end-to-end run with generated images, no preset files needed

use face_replacer::{
    compositor::PresetSet,
    config::Config,
    photo::Photo,
    regions::FeatureKind,
    session::{EditorSession, GestureScript},
};
use image::{DynamicImage, Rgba, RgbaImage};

fn disc(size: u32, color: [u8; 3]) -> DynamicImage {
    let r = size as f32 / 2.0;
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as f32 + 0.5 - r, y as f32 + 0.5 - r);
        let alpha = if dx * dx + dy * dy <= r * r { 255 } else { 0 };
        Rgba([color[0], color[1], color[2], alpha])
    });
    DynamicImage::ImageRgba8(image)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing Face-Replacer core functionality");

    println!("\n1. Building presets...");
    let presets = PresetSet::from_images(
        disc(64, [40, 90, 220]),
        disc(64, [40, 180, 90]),
        disc(64, [220, 60, 60]),
    );

    println!("\n2. Creating session on a 400x300 photo...");
    let config = Config::default();
    let mut session = EditorSession::new(&config, presets);
    session.set_image(Photo::new_filled(400, 300, [230, 200, 170]));

    println!("\n3. Widening the mouth by its bottom-right handle...");
    session.replay(&GestureScript::drag((320, 240), &[(330, 245)]));
    if let Some(regions) = session.regions() {
        let mouth = regions.get(FeatureKind::Mouth);
        println!("   mouth: ({}, {}) {}x{}", mouth.x, mouth.y, mouth.width, mouth.height);
        assert_eq!((mouth.width, mouth.height), (130, 45));
    }

    println!("\n4. Compositing...");
    session.save_result("minimal_test_output.png")?;
    println!("   Output saved to: minimal_test_output.png");

    session.render_overlay()?.save("minimal_test_overlay.png")?;
    println!("   Overlay saved to: minimal_test_overlay.png");

    println!("\nAll steps completed.");
    Ok(())
}
