use serde_json::{json, Value};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let missions = [
        "Communications",
        "Earth Science",
        "Navigation",
        "Technology",
        "Unknown",
    ];
    let shapes = ["Box", "Box + 1 Pan", "Box + 2 Pan", "Cyl", "Sphere"];
    let classes = ["Payload", "Debris", "Rocket Body"];

    let mut records: Vec<Value> = Vec::new();

    for i in 0..120i64 {
        let mission = missions[(rng.next_u64() % missions.len() as u64) as usize];
        let shape = shapes[(rng.next_u64() % shapes.len() as u64) as usize];
        let class = classes[(rng.next_u64() % classes.len() as u64) as usize];
        let year = 1990 + (rng.next_u64() % 35) as i64;
        let month = 1 + (rng.next_u64() % 12) as i64;
        let day = 1 + (rng.next_u64() % 28) as i64;

        let width = round2(rng.range(0.1, 5.0));
        let height = round2(rng.range(0.1, 5.0));
        let depth = round2(rng.range(0.1, 5.0));
        let x_sect_min = round2(rng.range(0.05, 2.0));

        let mut attributes = json!({
            "name": format!("SAT-{:04}", i + 1),
            "mission": mission,
            "active": rng.next_f64() < 0.6,
            "objectClass": class,
            "shape": shape,
            "firstEpoch": format!("{year:04}-{month:02}-{day:02}"),
            "mass": round2(rng.range(1.0, 6000.0)),
            "width": width,
            "height": height,
            "depth": depth,
            "span": round2(rng.range(0.5, 30.0)),
            "xSectMin": x_sect_min,
            "xSectMax": round2(x_sect_min + rng.range(0.0, 10.0)),
            "operator": if rng.next_f64() < 0.5 { "ESA" } else { "NASA" },
        });

        // A slice of the catalog has gaps, like the real feed.
        if rng.next_f64() < 0.1 {
            let obj = attributes.as_object_mut().unwrap();
            obj.remove("mass");
            obj.remove("firstEpoch");
        }
        if rng.next_f64() < 0.1 {
            let obj = attributes.as_object_mut().unwrap();
            obj.remove("width");
            obj.remove("span");
        }

        records.push(json!({ "id": i + 1, "attributes": attributes }));
    }

    let count = records.len();
    let payload = json!({ "data": records });
    let output_path = "sample_spacecraft.json";
    std::fs::write(
        output_path,
        serde_json::to_string_pretty(&payload).expect("serializing sample catalog"),
    )
    .expect("writing sample catalog");

    println!("Wrote {count} records to {output_path}");
}
