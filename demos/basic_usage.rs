use bigdecimal::BigDecimal;
use decivec::{angle_degrees, cross_product, dot, is_orthogonal, is_parallel, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧮 Decimal Vector Demo");
    println!("======================\n");

    // Construction from strings keeps decimal values exact
    let v = Vector::from_strs(&["3", "4"])?;
    let w = Vector::from_strs(&["-4", "3"])?;
    println!("v = {}", v);
    println!("w = {}", w);

    // Arithmetic
    println!("\n➕ Arithmetic");
    println!("v + w = {}", v.add(&w)?);
    println!("v - w = {}", v.subtract(&w)?);
    println!("2v    = {}", v.scale(&BigDecimal::from(2)));

    // Magnitude and normalization
    println!("\n📏 Magnitude");
    println!("|v| = {}", v.magnitude());
    println!("unit v = {}", v.normalize()?.round(6));

    // Angles and alignment
    println!("\n📐 Angles");
    println!("angle(v, w) = {} degrees", angle_degrees(&v, &w)?);
    println!("dot(v, w) = {}", dot(&v, &w)?);
    println!("orthogonal? {}", is_orthogonal(&v, &w)?);
    println!("parallel?   {}", is_parallel(&v, &w)?);

    // Projection splits v into parallel and orthogonal parts
    println!("\n🔀 Projection");
    let basis = Vector::from_strs(&["1", "1"])?;
    let parallel = v.projection(&basis)?;
    let orthogonal = v.rejection(&basis)?;
    println!("proj of v onto {} = {}", basis, parallel.round(6));
    println!("rej  of v from {} = {}", basis, orthogonal.round(6));
    println!("recomposed = {}", parallel.add(&orthogonal)?.round(6));

    // Cross product needs 3 dimensions
    println!("\n❌ Cross product");
    let e1 = Vector::from_strs(&["1", "0", "0"])?;
    let e2 = Vector::from_strs(&["0", "1", "0"])?;
    println!("e1 x e2 = {}", cross_product(&e1, &e2)?);

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
