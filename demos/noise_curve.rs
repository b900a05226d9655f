use lattice_noise::{NoiseField1D, ValueNoise1D};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

fn main() {
    env_logger::init();
    std::fs::create_dir_all("out").unwrap();

    let image_width = 400;
    let image_height = 120;
    let mut pixmap = Pixmap::new(image_width, image_height).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(80, 80, 80, 255));

    let noise = ValueNoise1D::with_seed(16);
    let (start, step) = (-10.0, 0.05);
    let samples = noise.sample_line(start, step, image_width as usize);

    let path = {
        let mut pb = PathBuilder::new();
        for (i, v) in samples.iter().enumerate() {
            let px = i as f32;
            let py = (1.0 - *v as f32) * (image_height as f32 - 20.0) + 10.0;
            if i == 0 {
                pb.move_to(px, py);
            } else {
                pb.line_to(px, py);
            }
        }
        pb.finish()
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(230, 41, 55, 255);
    let mut stroke = Stroke::default();
    stroke.width = 1.5;

    pixmap.stroke_path(&path.unwrap(), &paint, &stroke, Transform::identity(), None);
    pixmap.save_png("out/value1d.png").unwrap();
}
