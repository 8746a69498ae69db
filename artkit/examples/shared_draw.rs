use artkit::prelude::*;
use artkit::utils::errors::Result;

fn main() -> Result<()> {
    RandomSource::seed(2024);

    let hue = 100.0 + uniform_float(-50.0, 50.0);
    let offset = uniform_int(0, 20);

    let mut rect: Shape = Rect::new(&offset, &offset, 100, 100)
        .stroke(Color::hsla(&hue, 50, 50, 0.2))
        .into();
    rect.add(Circle::new(50.0 + &offset, 50, 45).fill(Color::hsla(&hue, 50, 50, 0.4)));

    println!("hue expression: {}", hue);
    println!("hue value:      {}", hue.resolve()?);
    println!("{}", rect.to_json_pretty()?);
    Ok(())
}
