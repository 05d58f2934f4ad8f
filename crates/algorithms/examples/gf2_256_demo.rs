//! GF(2^256) multiplication walkthrough
//!
//! Prints a small product, then squares a random element 256 times. Since
//! x^(2^256) = x for every x in GF(2^256), the final value equals the seed.

use binfield_algorithms::{multiply, FieldElement, GF2_256_FIELD_ELEMENT_SIZE};
use rand::rngs::OsRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=====================================");
    println!("GF(2^256) Little-Endian Multiplication");
    println!("=====================================");

    let d1 = hex::decode("0300000000000000000000000000000000000000000000000000000000000000")?;
    let d2 = hex::decode("0500000000000000000000000000000000000000000000000000000000000000")?;

    let d3 = multiply(&d1, &d2)?;

    println!("\nInput 1 (3):      {}", hex::encode(&d1));
    println!("Input 2 (5):      {}", hex::encode(&d2));
    println!("Result (3 * 5):   {}", hex::encode(d3));

    let seed = FieldElement::random(&mut OsRng);
    let mut x = seed;
    let mut count = 0;
    for _ in 0..GF2_256_FIELD_ELEMENT_SIZE * 8 {
        x = x.square();
        print!("[{}...] ", hex::encode(&x.to_bytes()[..3]));
        count += 1;
    }

    println!("\nMultiplications: {}", count);
    println!("\nFinal:    {}", hex::encode(x.to_bytes()));
    println!("Expected: {}", hex::encode(seed.to_bytes()));

    if x != seed {
        return Err("chained squaring did not return to the seed".into());
    }
    Ok(())
}
