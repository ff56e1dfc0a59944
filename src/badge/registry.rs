use std::collections::HashMap;

use crate::{
    badge::state::BadgeState,
    config::model::BadgeConfiguration,
    host::binding::{HostBinding, ShapeSpec},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Three-state view of a host's badge.
pub enum BadgeStatus {
    /// The host has no badge.
    Unattached,
    /// The badge is attached and shown.
    Visible,
    /// The badge is attached but hidden.
    Hidden,
}

/// Badge lifecycle for every host served by one binding.
///
/// Each host has at most one [`BadgeState`], keyed by host identity. Every
/// operation on a host without a badge is a silent no-op, except the
/// queries, which report "not hidden" / [`BadgeStatus::Unattached`].
///
/// All calls, including [`Badges::orientation_changed`], are expected on the
/// UI thread. Animations are handed to the binding and run after the
/// triggering call returns. Every show or hide first cancels whatever is
/// still animating on the badge, so the last call wins.
#[derive(Debug)]
pub struct Badges<B: HostBinding> {
    binding: B,
    states: HashMap<B::Host, BadgeState>,
    staged: HashMap<B::Host, BadgeConfiguration>,
}

impl<B: HostBinding> Badges<B> {
    /// Registry with no badges, driving `binding`.
    pub fn new(binding: B) -> Self {
        Self {
            binding,
            states: HashMap::new(),
            staged: HashMap::new(),
        }
    }

    /// The host binding.
    pub fn binding(&self) -> &B {
        &self.binding
    }

    /// Mutable access to the host binding.
    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    /// Give the binding back, dropping all badge state.
    pub fn into_binding(self) -> B {
        self.binding
    }

    /// Badge state of `host`, if attached.
    pub fn state(&self, host: B::Host) -> Option<&BadgeState> {
        self.states.get(&host)
    }

    /// Whether `host` has a badge.
    pub fn is_attached(&self, host: B::Host) -> bool {
        self.states.contains_key(&host)
    }

    /// Number of hosts with an attached badge.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no host has a badge.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Attach a hidden badge to `host`.
    ///
    /// A second call for an attached host does nothing, so shapes are never
    /// duplicated and the orientation subscription is made once.
    #[tracing::instrument(skip(self, config))]
    pub fn setup_badge(
        &mut self,
        host: B::Host,
        config: &BadgeConfiguration,
        is_special_host: bool,
    ) {
        if self.states.contains_key(&host) {
            tracing::debug!("badge already attached");
            return;
        }

        let shapes = self
            .binding
            .attach_shapes(host, &ShapeSpec::from_config(config));
        let state = BadgeState::new(shapes, config, is_special_host);
        state.set_visible(&mut self.binding, false);
        self.binding.subscribe_orientation_change(host);
        self.staged.remove(&host);
        self.states.insert(host, state);
    }

    /// Remember `config` for a host whose view may not exist yet.
    ///
    /// The first [`Badges::show_badge`] on that host attaches it as a special
    /// host (toolbar-item style). Restaging replaces the pending config.
    #[tracing::instrument(skip(self, config))]
    pub fn stage_badge(&mut self, host: B::Host, config: BadgeConfiguration) {
        if self.states.contains_key(&host) {
            tracing::debug!("badge already attached; staged config ignored");
            return;
        }
        self.staged.insert(host, config);
    }

    /// Whether a config is waiting for the first show on `host`.
    pub fn has_staged(&self, host: B::Host) -> bool {
        self.staged.contains_key(&host)
    }

    /// Show the badge, updating the label when `text` is non-empty.
    #[tracing::instrument(skip(self, text))]
    pub fn show_badge(&mut self, host: B::Host, text: &str, animated: bool) {
        if !self.states.contains_key(&host)
            && let Some(config) = self.staged.remove(&host)
        {
            self.setup_badge(host, &config, true);
        }

        let Some(state) = self.states.get_mut(&host) else {
            tracing::debug!("show on host without badge ignored");
            return;
        };

        state.set_text(&mut self.binding, text);
        let bounds = self.binding.current_bounds(host);
        let orientation = self.binding.current_orientation();
        state.relayout(&mut self.binding, bounds, orientation);

        state.cancel_animations(&mut self.binding);
        if animated {
            state.play_appear(&mut self.binding);
        }
        // The transition owns the in-flight look; the shapes end up visible
        // either way.
        state.set_visible(&mut self.binding, true);
    }

    /// Hide the badge; an animated hide stays visible until its transition
    /// completes.
    #[tracing::instrument(skip(self))]
    pub fn hide_badge(&mut self, host: B::Host, animated: bool) {
        let Some(state) = self.states.get(&host) else {
            tracing::debug!("hide on host without badge ignored");
            return;
        };

        state.cancel_animations(&mut self.binding);
        if animated && state.play_disappear(&mut self.binding) {
            return;
        }
        state.set_visible(&mut self.binding, false);
    }

    /// `false` both for a visible badge and for a host without one; see
    /// [`Badges::badge_status`] to tell them apart.
    pub fn is_badge_hidden(&self, host: B::Host) -> bool {
        self.states
            .get(&host)
            .is_some_and(|state| state.is_hidden(&self.binding))
    }

    /// Attached-and-visible, attached-and-hidden, or no badge.
    pub fn badge_status(&self, host: B::Host) -> BadgeStatus {
        match self.states.get(&host) {
            None => BadgeStatus::Unattached,
            Some(state) if state.is_hidden(&self.binding) => BadgeStatus::Hidden,
            Some(_) => BadgeStatus::Visible,
        }
    }

    /// Re-layout `host` after its bounds or the interface orientation changed.
    #[tracing::instrument(skip(self))]
    pub fn orientation_changed(&mut self, host: B::Host) {
        let Some(state) = self.states.get_mut(&host) else {
            tracing::debug!("orientation change for host without badge ignored");
            return;
        };
        let bounds = self.binding.current_bounds(host);
        let orientation = self.binding.current_orientation();
        state.relayout(&mut self.binding, bounds, orientation);
    }

    /// Re-layout every attached host.
    pub fn orientation_changed_all(&mut self) {
        let orientation = self.binding.current_orientation();
        for (&host, state) in &mut self.states {
            let bounds = self.binding.current_bounds(host);
            state.relayout(&mut self.binding, bounds, orientation);
        }
    }

    /// Drop everything held for `host`; call when the host view is destroyed.
    #[tracing::instrument(skip(self))]
    pub fn teardown(&mut self, host: B::Host) {
        self.staged.remove(&host);
        let Some(state) = self.states.remove(&host) else {
            return;
        };
        self.binding.unsubscribe(host);
        self.binding.detach_shapes(host, state.shapes());
    }
}
