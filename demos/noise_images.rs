use lattice_noise::{
    image::{generate_random_pattern_seeded, rasterise_field},
    Image, NoiseParameters, PerlinNoise2D, ResampleMethod, ValueNoise2D,
};

fn save(image: &Image, path: &str) {
    let buf = image::RgbaImage::from_raw(image.width(), image.height(), image.to_rgba8()).unwrap();
    buf.save(path).unwrap();
}

fn main() {
    env_logger::init();
    std::fs::create_dir_all("out").unwrap();

    let pattern = generate_random_pattern_seeded(256, 256, 16);
    let portion = pattern.extract_sub_image(10, 10).unwrap();
    let mapped = portion.resize(256, 256, ResampleMethod::Nearest).unwrap();
    let smooth = portion
        .resize(256, 256, ResampleMethod::BilinearSmooth)
        .unwrap();

    save(&pattern, "out/pattern.png");
    save(&portion, "out/portion.png");
    save(&mapped, "out/portion-nearest.png");
    save(&smooth, "out/portion-smooth.png");

    let params = NoiseParameters::new(256, 16).unwrap();
    let corners = ((0.0, 0.0), (10.0, 10.0));

    let value = ValueNoise2D::new(params);
    save(&rasterise_field(&value, 250, 250, corners), "out/value2d.png");

    let perlin = PerlinNoise2D::new(params);
    save(&rasterise_field(&perlin, 250, 250, corners), "out/perlin2d.png");
}
