use artkit::prelude::*;

/// A drawing program. `tick` counts animation frames; still scenes ignore it.
pub trait Scene {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn draw(&self, tick: u64) -> Shape;
}

/* ---- colored-rectangles ---- */

pub struct ColoredRectangles;

impl Scene for ColoredRectangles {
    fn name(&self) -> &'static str {
        "colored-rectangles"
    }

    fn description(&self) -> &'static str {
        "A row of five rectangles at random heights"
    }

    fn draw(&self, _tick: u64) -> Shape {
        let mut group: Shape = Group::new(0, 0, 100, 100).into();
        for n in 0..5 {
            let mut rect = Rect::new(20, uniform_float(10.0, 20.0), 18, 18)
                .fill(format!("hsl({}, 50%, 50%)", n * 30));
            rect.x = (n * 20).into();
            group.add(rect);
        }
        group
    }
}

/* ---- circle-in-squares ---- */

pub struct CircleInSquares;

impl CircleInSquares {
    fn rect_with_circle() -> Rect {
        let hue = 100.0 + uniform_float(-50.0, 50.0);
        let circle = Circle::new(50, 50, 45).fill(Color::hsla(hue, 50, 50, 0.4));
        Rect::new(0, 0, 100, 100)
            .stroke(Color::hsla(200, 50, 50, 0.2))
            .fill(Color::hsla(200, 50, 50, 0.5))
            .with_items(vec![circle.into()])
    }
}

impl Scene for CircleInSquares {
    fn name(&self) -> &'static str {
        "circle-in-squares"
    }

    fn description(&self) -> &'static str {
        "Twenty squares at random positions, each holding a tinted circle"
    }

    fn draw(&self, _tick: u64) -> Shape {
        let mut group: Shape = Group::new(0, 0, 50, 50).into();
        for _ in 0..20 {
            let mut rect = Self::rect_with_circle();
            rect.x = uniform_float(0.0, 80.0).into();
            rect.y = uniform_float(0.0, 80.0).into();
            rect.width = 20.into();
            rect.height = 20.into();
            group.add(rect);
        }
        group
    }
}

/* ---- orbit ---- */

/// A ring of circles sharing one random radius, rotated by `tick`.
pub struct Orbit;

impl Scene for Orbit {
    fn name(&self) -> &'static str {
        "orbit"
    }

    fn description(&self) -> &'static str {
        "Eight circles on a ring of random radius, turning with the tick"
    }

    fn draw(&self, tick: u64) -> Shape {
        let radius = normal_float(30.0, 5.0);
        let size = &radius / 6.0;
        let mut group: Shape = Group::new(0, 0, 100, 100).into();
        for k in 0..8u64 {
            let angle = (k as f64 + tick as f64 / 10.0) * std::f64::consts::TAU / 8.0;
            let cx = 50.0 + &radius * angle.cos();
            let cy = 50.0 + &radius * angle.sin();
            let hue = uniform_int(0, 360);
            group.add(Circle::new(cx, cy, &size).fill(Color::hsla(hue, 60, 50, 0.8)));
        }
        group
    }
}

pub fn scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(ColoredRectangles),
        Box::new(CircleInSquares),
        Box::new(Orbit),
    ]
}

pub fn scene_names() -> Vec<&'static str> {
    scenes().iter().map(|s| s.name()).collect()
}

pub fn scene_by_name(name: &str) -> Option<Box<dyn Scene>> {
    scenes().into_iter().find(|s| s.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(
            scene_names(),
            vec!["colored-rectangles", "circle-in-squares", "orbit"]
        );
        assert!(scene_by_name("orbit").is_some());
        assert!(scene_by_name("missing").is_none());
    }

    #[test]
    fn test_colored_rectangles() {
        let value = ColoredRectangles.draw(0).to_json_value().unwrap();
        assert_eq!(value["type"], "group");
        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        for (n, item) in items.iter().enumerate() {
            assert_eq!(item["x"], (n * 20) as f64);
            let y = item["y"].as_f64().unwrap();
            assert!((10.0..20.0).contains(&y));
            assert_eq!(item["fill"], format!("hsl({}, 50%, 50%)", n * 30));
        }
    }

    #[test]
    fn test_same_seed_same_drawing() {
        RandomSource::seed(11);
        let a = CircleInSquares.draw(0).to_json().unwrap();
        RandomSource::seed(11);
        let b = CircleInSquares.draw(0).to_json().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_orbit_shares_radius() {
        let value = Orbit.draw(3).to_json_value().unwrap();
        let items = value["items"].as_array().unwrap();
        let r0 = items[0]["r"].as_f64().unwrap();
        assert!(items.iter().all(|c| c["r"].as_f64().unwrap() == r0));
    }
}
