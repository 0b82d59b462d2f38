use const_math::*;

fn main() {
    // -- Constants at two precisions --
    println!("=== Constants ===");
    println!("pi     f32 = {:.9}   f64 = {:.17}", pi::<f32>(), pi::<f64>());
    println!("e      f32 = {:.9}   f64 = {:.17}", f32::E, f64::E);
    println!("phi    f32 = {:.9}   f64 = {:.17}", phi::<f32>(), phi::<f64>());
    println!("egamma f32 = {:.9}   f64 = {:.17}", f32::EGAMMA, f64::EGAMMA);

    // -- min / max --
    println!("\n=== min / max ===");
    let samples = [4.5_f64, -1.25, 9.0, 3.0];
    println!("min(2, 7) = {}", min(2, 7));
    println!("max_of({samples:?}) = {:?}", max_of(&samples));
    println!("min_in(samples[1..]) = {:?}", min_in(samples[1..].iter()));
    let empty: [i32; 0] = [];
    match min_of(&empty) {
        Ok(v) => println!("min_of([]) = {v}"),
        Err(err) => println!("min_of([]) failed: {err}"),
    }

    // -- abs / pow --
    println!("\n=== abs / pow ===");
    println!("abs(-3) = {}", abs(-3));
    println!("checked_abs(i32::MIN) = {:?}", checked_abs(i32::MIN));
    println!("pow(2, 10) = {:?}", pow(2, 10));
    println!("pow(2, -1) = {:?}", pow(2, -1));
    println!("checked_pow(3_u8, 6) = {:?}", checked_pow(3_u8, 6));
    println!("powi(2.0, -3) = {}", powi(2.0_f64, -3));
}
