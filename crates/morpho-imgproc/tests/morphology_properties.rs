use rand::{rngs::StdRng, Rng, SeedableRng};

use morpho_image::{BinaryGrid, GrayGrid, Grid, GridSize};
use morpho_imgproc::{
    label::label4,
    morphology::{binary, gray, MorphologyError, StructuringElement},
    region::{remove_small_holes, remove_small_objects},
};

fn random_binary(rng: &mut StdRng, size: GridSize, margin: usize, p: f64) -> BinaryGrid {
    let mut img = Grid::zeros(size);
    for y in margin..size.height - margin {
        for x in margin..size.width - margin {
            if rng.random_bool(p) {
                img.set(y, x, 1).expect("in bounds");
            }
        }
    }
    img
}

fn random_gray(rng: &mut StdRng, size: GridSize) -> GrayGrid {
    let data = (0..size.area()).map(|_| rng.random::<u8>()).collect();
    Grid::new(size, data).expect("matching length")
}

fn elements() -> Result<Vec<StructuringElement>, MorphologyError> {
    Ok(vec![
        StructuringElement::square(3)?,
        StructuringElement::square(5)?,
        StructuringElement::cross(3)?,
        StructuringElement::vertical_line(3)?,
        StructuringElement::horizontal_line(5)?,
    ])
}

#[test]
fn opening_and_closing_are_idempotent() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(7);
    for se in elements()? {
        for _ in 0..8 {
            let img = random_binary(&mut rng, [17, 13].into(), 0, 0.55);

            let opened = binary::opening(&img, &se);
            assert_eq!(binary::opening(&opened, &se), opened);

            let closed = binary::closing(&img, &se);
            assert_eq!(binary::closing(&closed, &se), closed);
        }
    }
    Ok(())
}

#[test]
fn opening_shrinks_and_closing_grows_away_from_borders() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(11);
    let se = StructuringElement::square(3)?;
    let img = random_binary(&mut rng, [20, 20].into(), 3, 0.5);

    let opened = binary::opening(&img, &se);
    let closed = binary::closing(&img, &se);
    for ((&o, &c), &v) in opened
        .as_slice()
        .iter()
        .zip(closed.as_slice())
        .zip(img.as_slice())
    {
        assert!(o <= v);
        assert!(c >= v);
    }
    Ok(())
}

#[test]
fn binary_duality_away_from_borders() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(3);
    for se in elements()? {
        let r = se.radius();
        let img = random_binary(&mut rng, [24, 19].into(), r, 0.4);

        let lhs = binary::erode(&binary::invert(&img), &se);
        let rhs = binary::invert(&binary::dilate(&img, &se));

        for y in r..img.height() - r {
            for x in r..img.width() - r {
                assert_eq!(lhs.get(y, x), rhs.get(y, x), "mismatch at ({y}, {x})");
            }
        }
    }
    Ok(())
}

#[test]
fn gray_duality_holds_everywhere() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(5);
    for se in elements()? {
        let img = random_gray(&mut rng, [15, 9].into());
        let complement = |g: &GrayGrid| g.map(|&v| u8::MAX - v);

        let lhs = gray::erode(&complement(&img), &se);
        let rhs = complement(&gray::dilate(&img, &se));
        assert_eq!(lhs, rhs);
    }
    Ok(())
}

#[test]
fn binary_and_gray_agree_on_binary_input() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(13);
    let se = StructuringElement::square(3)?;
    let img = random_binary(&mut rng, [12, 12].into(), 0, 0.5);

    // dilation pads with 0 in both variants
    let as_gray = img.map(|&v| v * u8::MAX);
    let gray_dilated = gray::dilate(&as_gray, &se).map(|&v| v / u8::MAX);
    assert_eq!(gray_dilated, binary::dilate(&img, &se));
    Ok(())
}

#[test]
fn border_policy_single_pixel() -> Result<(), MorphologyError> {
    let img = Grid::from_size_val([1, 1].into(), 1u8);
    let se = StructuringElement::square(3)?;
    assert_eq!(binary::erode(&img, &se).as_slice(), &[0]);
    assert_eq!(binary::dilate(&img, &se).as_slice(), &[1]);
    Ok(())
}

#[test]
fn labeling_then_filtering_is_consistent() {
    let mut rng = StdRng::seed_from_u64(17);
    let img = random_binary(&mut rng, [30, 20].into(), 0, 0.45);

    let (labels, count) = label4(&img);
    assert_eq!(label4(&img), (labels.clone(), count));

    let min_size = 4;
    let filtered = remove_small_objects(&img, min_size);
    let mut sizes = vec![0usize; count as usize + 1];
    for &l in labels.as_slice() {
        sizes[l as usize] += 1;
    }
    for ((&f, &v), &l) in filtered
        .as_slice()
        .iter()
        .zip(img.as_slice())
        .zip(labels.as_slice())
    {
        let expected = v == 1 && sizes[l as usize] >= min_size;
        assert_eq!(f, u8::from(expected));
    }
}

#[test]
fn hole_removal_on_filled_rectangle() {
    let mut img = Grid::from_size_val([6, 5].into(), 1u8);
    img.set(2, 3, 0).expect("in bounds");

    let filled = remove_small_holes(&img, 1);
    assert!(filled.as_slice().iter().all(|&v| v == 1));

    let untouched = remove_small_holes(&img, 0);
    assert_eq!(untouched, img);
}
