/// Xorshift PRNG, deterministic for a given seed so that tracer layouts are reproducible
#[derive(Clone, Copy)]
pub(crate) struct Xor128 {
    x: u32,
}

impl Xor128 {
    pub(crate) fn new(seed: u32) -> Self {
        let mut ret = Xor128 { x: 2463534242 };
        if 0 < seed {
            ret.x ^= seed;
            ret.nexti();
        }
        ret.nexti();
        ret
    }

    pub(crate) fn nexti(&mut self) -> u32 {
        // T = (I + L^a)(I + R^b)(I + L^c)
        // a = 13, b = 17, c = 5
        let x1 = self.x ^ (self.x << 13);
        let x2 = x1 ^ (x1 >> 17);
        self.x = x2 ^ (x2 << 5);
        self.x
    }

    /// Uniform sample in `[0, 1)`. Only the top 24 bits are used so the result is exact in f32.
    pub(crate) fn next_f32(&mut self) -> f32 {
        (self.nexti() >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[test]
fn test_xor128_deterministic() {
    let mut a = Xor128::new(123);
    let mut b = Xor128::new(123);
    for _ in 0..16 {
        assert_eq!(a.nexti(), b.nexti());
    }
    let mut c = Xor128::new(124);
    assert_ne!(Xor128::new(123).nexti(), c.nexti());
}

#[test]
fn test_next_f32_range() {
    let mut rng = Xor128::new(7);
    for _ in 0..10000 {
        let v = rng.next_f32();
        assert!((0. ..1.).contains(&v));
    }
}
