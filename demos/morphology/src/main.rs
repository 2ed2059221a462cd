use argh::FromArgs;
use std::path::PathBuf;

use morpho::image::{render, GrayGrid, Grid};
use morpho::imgproc::{
    morphology::{binary, gray, StructuringElement},
    region, threshold,
};
use morpho::io::pgm as P;

#[derive(FromArgs)]
/// Run the morphology exercises: erosion, opening, hole filling, grayscale and Otsu
struct Args {
    /// directory where the PGM files are written
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// optional PGM image to threshold instead of the synthetic one
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,
}

fn show_binary(title: &str, img: &Grid<u8>) {
    println!("--- {title} ---\n{}", render::render_binary(img));
}

fn show_gray(title: &str, img: &GrayGrid) {
    println!("--- {title} ---\n{}", render::render_gray(img));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // 1. the bridge: a vertical erosion cuts the thin horizontal link
    let bridge = Grid::from_rows(vec![
        vec![0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 0, 1, 1, 0],
        vec![0, 1, 1, 1, 1, 1, 1, 0],
        vec![0, 1, 1, 0, 0, 1, 1, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 0],
    ])?;
    show_binary("bridge", &bridge);
    let vertical = StructuringElement::vertical_line(3)?;
    show_binary("bridge eroded (vertical 3)", &binary::erode(&bridge, &vertical));

    // 2. size filter: opening keeps only what the square fits into
    let mut blobs = Grid::<u8>::zeros([10, 7].into());
    blobs.set(1, 1, 1)?;
    for y in 1..4 {
        for x in 4..7 {
            blobs.set(y, x, 1)?;
        }
    }
    show_binary("dot + 3x3 block", &blobs);
    for k in [3, 5] {
        let se = StructuringElement::square(k)?;
        show_binary(&format!("opening k={k}"), &binary::opening(&blobs, &se));
    }

    // 3. holes
    let holes = Grid::from_rows(vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 0, 1, 1, 1],
        vec![1, 1, 1, 0, 1],
        vec![1, 1, 1, 1, 1],
    ])?;
    show_binary("holes", &holes);
    show_binary("holes removed (max 1)", &region::remove_small_holes(&holes, 1));

    // 4. grayscale
    let pyramid: GrayGrid = Grid::from_rows(vec![
        vec![50, 50, 50, 50, 50],
        vec![50, 100, 100, 100, 50],
        vec![50, 100, 255, 100, 50],
        vec![50, 100, 100, 100, 50],
        vec![50, 50, 50, 50, 50],
    ])?;
    let square = StructuringElement::square(3)?;
    show_gray("gray", &pyramid);
    show_gray("gray eroded", &gray::erode(&pyramid, &square));
    show_gray("gray dilated", &gray::dilate(&pyramid, &square));

    // 5. PGM round trip and Otsu
    std::fs::create_dir_all(&args.output_dir)?;
    let input_path = match args.input {
        Some(path) => path,
        None => {
            let mut synthetic = Grid::from_size_val([10, 10].into(), 50u8);
            for y in 3..7 {
                for x in 3..7 {
                    synthetic.set(y, x, 200)?;
                }
            }
            let path = args.output_dir.join("test_input.pgm");
            P::write_image_pgm(&path, &synthetic)?;
            path
        }
    };

    let loaded = P::read_image_pgm(&input_path)?;
    let (thr, binarized) = threshold::otsu_binarize(&loaded);
    println!("Otsu threshold: {thr}\n");
    show_binary("binarized", &binarized);

    let result_path = args.output_dir.join("test_result.pgm");
    P::write_image_pgm(&result_path, &threshold::binary_to_gray(&binarized))?;
    log::info!("result written to {}", result_path.display());

    Ok(())
}
