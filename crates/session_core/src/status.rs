//! Timed status effects shown on the player: pickup glows, the shield
//! window, and the freeze overlay. Entries decay independently and are
//! purged when they reach zero.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Heal,
    Speed,
    Coin,
    Shield,
    Freeze,
}

impl StatusKind {
    pub fn duration_s(self) -> f32 {
        match self {
            StatusKind::Heal | StatusKind::Speed => 3.0,
            StatusKind::Coin => 2.0,
            StatusKind::Shield | StatusKind::Freeze => 7.0,
        }
    }

    /// Display color for the pulse ring.
    pub fn color(self) -> [u8; 3] {
        match self {
            StatusKind::Heal => [0, 255, 0],
            StatusKind::Speed => [0, 0, 255],
            StatusKind::Coin => [255, 255, 0],
            StatusKind::Shield | StatusKind::Freeze => [173, 216, 230],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub remaining_s: f32,
    pub total_s: f32,
}

impl StatusEffect {
    /// Elapsed time, used as the pulse animation phase.
    #[inline]
    pub fn phase_s(&self) -> f32 {
        self.total_s - self.remaining_s
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusSet {
    effects: Vec<StatusEffect>,
}

impl StatusSet {
    /// Push a fresh entry; same-kind entries may coexist.
    pub fn add(&mut self, kind: StatusKind) {
        let d = kind.duration_s();
        self.effects.push(StatusEffect { kind, remaining_s: d, total_s: d });
    }

    /// Re-arm: reset an existing entry of this kind instead of stacking.
    pub fn arm(&mut self, kind: StatusKind) {
        let d = kind.duration_s();
        if let Some(e) = self.effects.iter_mut().find(|e| e.kind == kind) {
            e.remaining_s = d;
            e.total_s = d;
        } else {
            self.effects.push(StatusEffect { kind, remaining_s: d, total_s: d });
        }
    }

    pub fn tick(&mut self, dt: f32) {
        for e in &mut self.effects {
            e.remaining_s -= dt;
        }
        self.effects.retain(|e| e.remaining_s > 0.0);
    }

    #[inline]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
