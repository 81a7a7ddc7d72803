use cmsketch::{CountMinSketch, SketchError};
use fnv::FnvHasher;
use std::hash::Hasher;

const WIDTH: usize = 64;
const DEPTH: usize = 3;

// one FNV pass per row, salted with the row number
fn coords(word: &str) -> [usize; DEPTH] {
    let mut out = [0; DEPTH];
    out.iter_mut().enumerate().for_each(|(row, c)| {
        let mut h = FnvHasher::default();
        h.write_usize(row);
        h.write(word.as_bytes());
        *c = (h.finish() % WIDTH as u64) as usize;
    });
    out
}

fn main() -> Result<(), SketchError> {
    let text = "the quick brown fox jumps over the lazy dog the fox";
    let mut sketch = CountMinSketch::<u32>::new(WIDTH, DEPTH)?;

    for word in text.split_whitespace() {
        sketch.increment(&coords(word))?;
    }

    assert!(sketch.estimate(&coords("the"))? >= 3);
    assert!(sketch.estimate(&coords("fox"))? >= 2);
    assert!(sketch.estimate(&coords("dog"))? >= 1);

    // age out one occurrence of "the"
    sketch.decrement(&coords("the"))?;
    assert!(sketch.estimate(&coords("the"))? >= 2);

    for word in ["the", "fox", "dog", "cat"].iter() {
        println!("{:>4}: ~{}", word, sketch.estimate(&coords(word))?);
    }
    println!("{:?}", sketch);

    sketch.reset();
    assert_eq!(sketch.estimate(&coords("the"))?, 0);
    sketch.destroy();
    Ok(())
}
