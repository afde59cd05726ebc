//! Decorative layers: background blobs and hero particles.

#[derive(Debug, Clone, Copy)]
pub struct Blob {
    pub size: &'static str,
    pub opacity: &'static str,
    /// Inline placement, e.g. `top: 10%; left: 10%`.
    pub placement: &'static str,
    pub delay_s: u32,
    pub dark: &'static str,
    pub light: &'static str,
}

impl Blob {
    pub fn class(&self, is_dark: bool) -> String {
        let gradient = if is_dark { self.dark } else { self.light };
        format!(
            "absolute {} rounded-full blur-3xl {} animate-blob bg-gradient-to-r {}",
            self.size, self.opacity, gradient
        )
    }

    pub fn style(&self) -> String {
        format!("{}; animation-delay: {}s", self.placement, self.delay_s)
    }
}

pub static BLOBS: [Blob; 5] = [
    Blob {
        size: "w-96 h-96",
        opacity: "opacity-20",
        placement: "top: 10%; left: 10%",
        delay_s: 0,
        dark: "from-cyan-400 to-blue-500",
        light: "from-blue-400 to-purple-500",
    },
    Blob {
        size: "w-80 h-80",
        opacity: "opacity-20",
        placement: "top: 60%; right: 10%",
        delay_s: 2,
        dark: "from-green-400 to-cyan-500",
        light: "from-green-400 to-blue-500",
    },
    Blob {
        size: "w-72 h-72",
        opacity: "opacity-20",
        placement: "bottom: 10%; left: 50%",
        delay_s: 4,
        dark: "from-purple-500 to-pink-500",
        light: "from-purple-400 to-pink-400",
    },
    Blob {
        size: "w-64 h-64",
        opacity: "opacity-15",
        placement: "top: 30%; right: 30%",
        delay_s: 6,
        dark: "from-yellow-400 to-orange-500",
        light: "from-yellow-400 to-red-400",
    },
    Blob {
        size: "w-56 h-56",
        opacity: "opacity-15",
        placement: "bottom: 40%; right: 60%",
        delay_s: 8,
        dark: "from-indigo-500 to-purple-600",
        light: "from-indigo-400 to-purple-500",
    },
];

pub fn grid_overlay_style(is_dark: bool) -> String {
    let dot = if is_dark { "#ffffff" } else { "#000000" };
    format!(
        "background-image: radial-gradient(circle, {dot} 1px, transparent 1px); background-size: 50px 50px"
    )
}

pub const PARTICLE_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

/// Scattered particle layout. Seeded by index so the server render and the
/// hydrated page agree.
pub fn particles(count: usize) -> Vec<Particle> {
    let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        // xorshift64*
        seed ^= seed >> 12;
        seed ^= seed << 25;
        seed ^= seed >> 27;
        let v = seed.wrapping_mul(0x2545_f491_4f6c_dd1d);
        (v >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..count)
        .map(|_| Particle {
            left_pct: next() * 100.0,
            top_pct: next() * 100.0,
            delay_s: next() * 5.0,
            duration_s: 5.0 + next() * 10.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_are_deterministic_and_in_range() {
        let first = particles(PARTICLE_COUNT);
        assert_eq!(first.len(), PARTICLE_COUNT);
        assert_eq!(first, particles(PARTICLE_COUNT));
        for p in &first {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..5.0).contains(&p.delay_s));
            assert!((5.0..15.0).contains(&p.duration_s));
        }
        // not all stacked in one spot
        assert!(first.iter().any(|p| (p.left_pct - first[0].left_pct).abs() > 1.0));
    }

    #[test]
    fn test_blob_class_follows_theme() {
        let blob = &BLOBS[0];
        assert!(blob.class(true).ends_with("from-cyan-400 to-blue-500"));
        assert!(blob.class(false).ends_with("from-blue-400 to-purple-500"));
        assert_eq!(blob.style(), "top: 10%; left: 10%; animation-delay: 0s");
    }

    #[test]
    fn test_blob_delays_are_staggered() {
        let delays: Vec<_> = BLOBS.iter().map(|b| b.delay_s).collect();
        assert_eq!(delays, vec![0, 2, 4, 6, 8]);
    }
}
