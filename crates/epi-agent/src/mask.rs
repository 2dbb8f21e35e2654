//! Per-context mask-wearing choices.

/// The three social contexts an agent decides masking for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskContext {
    /// Away from familiar people: global socialising, shopping.
    Global = 0,
    /// Visiting friends.
    Local  = 1,
    /// Socialising with whoever is at the current location.
    Social = 2,
}

impl MaskContext {
    pub const ALL: [MaskContext; 3] = [MaskContext::Global, MaskContext::Local, MaskContext::Social];
}

/// Whether an agent will mask in each context, plus the infected-prevalence
/// thresholds at which it starts doing so.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskPolicy {
    pub will_mask:  [bool; 3],
    pub thresholds: [f64; 3],
    /// Set once [`adopt`](Self::adopt) has turned any context on.  Never
    /// cleared, so it survives the prevalence falling back below threshold.
    #[cfg_attr(feature = "serde", serde(default))]
    pub adopted:    bool,
}

impl MaskPolicy {
    /// Never masks and never adopts masking.
    pub fn never() -> Self {
        Self { will_mask: [false; 3], thresholds: [f64::INFINITY; 3], adopted: false }
    }

    /// Masks in every context.
    pub fn always() -> Self {
        Self { will_mask: [true; 3], thresholds: [0.0; 3], adopted: false }
    }

    #[inline]
    pub fn wants(&self, ctx: MaskContext) -> bool {
        self.will_mask[ctx as usize]
    }

    /// `true` if the agent masks in at least one context.
    pub fn masks_anywhere(&self) -> bool {
        self.will_mask.iter().any(|&m| m)
    }

    /// `true` if the agent masks anywhere now or has adopted masking at any
    /// earlier point in the run.
    pub fn ever_masked(&self) -> bool {
        self.adopted || self.masks_anywhere()
    }

    /// Re-evaluate every context: mask when `prevalence` (fraction of live
    /// agents currently infected) has reached the context's threshold.
    pub fn adopt(&mut self, prevalence: f64) {
        for ctx in MaskContext::ALL {
            let i = ctx as usize;
            let on = prevalence >= self.thresholds[i];
            self.will_mask[i] = on;
            self.adopted |= on;
        }
    }
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self::never()
    }
}
