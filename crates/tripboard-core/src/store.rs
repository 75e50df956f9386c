//! The client state store.
//!
//! [`AppStore`] is the single source of truth for who is using the app, which
//! groups are visible, and each group's whiteboard phase and plan cache. It
//! performs no network I/O. After every mutation the `currentUser` subset is
//! written through the injected [`StateRepository`]; write failures are
//! logged and never surface to callers.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{Result, TripboardError};
use crate::group::{Group, GroupId};
use crate::plan::PlanOption;
use crate::remote::UserInfoResponse;
use crate::state::{InMemoryStateRepository, PersistedState, StateRepository};
use crate::user::{Persona, User};
use crate::whiteboard::WhiteboardPhase;

/// Client-side application state.
///
/// Constructed once by the application's composition root and passed to UI
/// layers by reference. Every action runs to completion synchronously, so
/// concurrent callers observe last-write-wins per key.
pub struct AppStore {
    repository: Arc<dyn StateRepository>,
    current_user: Option<Arc<User>>,
    groups: Vec<Group>,
    selected_group_id: Option<GroupId>,
    whiteboard_by_group: HashMap<GroupId, WhiteboardPhase>,
    plan_options_by_group: HashMap<GroupId, Vec<PlanOption>>,
    selected_plan_id_by_group: HashMap<GroupId, String>,
    /// Last snapshot successfully written, to skip redundant writes.
    last_persisted: Option<PersistedState>,
}

impl AppStore {
    /// Creates a store and rehydrates the persisted subset from `repository`.
    ///
    /// Missing or unreadable persisted data leaves every field at its default.
    pub fn load(repository: Arc<dyn StateRepository>) -> Self {
        let mut store = Self {
            repository,
            current_user: None,
            groups: Vec::new(),
            selected_group_id: None,
            whiteboard_by_group: HashMap::new(),
            plan_options_by_group: HashMap::new(),
            selected_plan_id_by_group: HashMap::new(),
            last_persisted: None,
        };

        match store.repository.load_state() {
            Ok(Some(state)) => {
                info!(
                    has_user = state.current_user.is_some(),
                    "Restored persisted store state"
                );
                store.current_user = state.current_user.clone().map(Arc::new);
                store.last_persisted = Some(state);
            }
            Ok(None) => debug!("No persisted store state, starting empty"),
            Err(e) => warn!(error = %e, "Failed to read persisted store state, starting empty"),
        }

        store
    }

    /// A store whose persistence lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::load(Arc::new(InMemoryStateRepository::new()))
    }

    // ============================================================================
    // Reads
    // ============================================================================

    pub fn current_user(&self) -> Option<&Arc<User>> {
        self.current_user.as_ref()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, group_id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == group_id)
    }

    pub fn selected_group_id(&self) -> Option<&GroupId> {
        self.selected_group_id.as_ref()
    }

    /// The selected group, if the selection points at a known group.
    pub fn selected_group(&self) -> Option<&Group> {
        self.selected_group_id.as_ref().and_then(|id| self.group(id))
    }

    /// The group's phase; a group without an entry is still `gathering`.
    pub fn whiteboard_phase(&self, group_id: &GroupId) -> WhiteboardPhase {
        self.whiteboard_entry(group_id).unwrap_or_default()
    }

    /// The raw phase entry, `None` when the group has none.
    pub fn whiteboard_entry(&self, group_id: &GroupId) -> Option<WhiteboardPhase> {
        self.whiteboard_by_group.get(group_id).copied()
    }

    pub fn plan_options(&self, group_id: &GroupId) -> &[PlanOption] {
        self.plan_options_by_group
            .get(group_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The stored selection, which may not resolve to a current option.
    pub fn selected_plan_id(&self, group_id: &GroupId) -> Option<&str> {
        self.selected_plan_id_by_group.get(group_id).map(String::as_str)
    }

    /// The selected plan option. A selection that does not match any current
    /// option reads as no selection.
    pub fn selected_plan(&self, group_id: &GroupId) -> Option<&PlanOption> {
        let plan_id = self.selected_plan_id(group_id)?;
        self.plan_options(group_id)
            .iter()
            .find(|option| option.plan_id == plan_id)
    }

    /// Whether any per-group state exists for `group_id`.
    pub fn has_group_state(&self, group_id: &GroupId) -> bool {
        self.whiteboard_by_group.contains_key(group_id)
            || self.plan_options_by_group.contains_key(group_id)
            || self.selected_plan_id_by_group.contains_key(group_id)
    }

    // ============================================================================
    // User
    // ============================================================================

    pub fn set_current_user(&mut self, user: User) {
        debug!(user_id = %user.id, "Setting current user");
        self.current_user = Some(Arc::new(user));
        self.persist();
    }

    /// Forgets the current user. The persisted entry becomes
    /// `{"currentUser": null}`; groups and per-group state are kept.
    pub fn sign_out(&mut self) {
        if self.current_user.take().is_some() {
            info!("Signed out");
        }
        self.persist();
    }

    /// Replaces the current user's persona. Does nothing without a user.
    ///
    /// A new `User` value is installed; `Arc`s handed out earlier keep
    /// pointing at the previous value.
    pub fn update_user_persona(&mut self, persona: Persona) {
        let Some(current) = self.current_user.as_ref() else {
            debug!("Ignoring persona update without a current user");
            return;
        };

        self.current_user = Some(Arc::new(current.with_persona(persona)));
        self.persist();
    }

    /// Attaches the survey persona and marks the user as onboarded.
    pub fn finish_onboarding(&mut self, persona: Persona) {
        let Some(current) = self.current_user.as_ref() else {
            debug!("Ignoring onboarding completion without a current user");
            return;
        };

        let mut user = current.with_persona(persona);
        user.is_new = Some(false);
        self.current_user = Some(Arc::new(user));
        self.persist();
    }

    // ============================================================================
    // Groups
    // ============================================================================

    /// Creates a group locally, selects it and starts it at `gathering`.
    pub fn create_group(&mut self, name: &str, destination_label: &str) -> Group {
        let group = Group::new(GroupId::generate_local(), name, destination_label);
        debug!(group_id = %group.id, group_name = name, "Creating local group");
        self.insert_group(group.clone());
        self.persist();
        group
    }

    /// Selects the group whose id equals `code`, or adds a placeholder for it.
    ///
    /// Joining the same code twice yields one group.
    pub fn join_group_by_code(&mut self, code: &str) -> Group {
        if let Some(existing) = self.groups.iter().find(|g| g.id.as_str() == code) {
            let existing = existing.clone();
            self.selected_group_id = Some(existing.id.clone());
            self.persist();
            return existing;
        }

        let group = Group::placeholder(code);
        debug!(group_id = %group.id, "Joining group by code");
        self.insert_group(group.clone());
        self.persist();
        group
    }

    /// Sets the selection without checking that the group exists.
    pub fn select_group(&mut self, group_id: Option<GroupId>) {
        self.selected_group_id = group_id;
        self.persist();
    }

    /// Removes the group and every piece of per-group state it owns.
    pub fn leave_group(&mut self, group_id: &GroupId) {
        self.groups.retain(|g| &g.id != group_id);
        if self.selected_group_id.as_ref() == Some(group_id) {
            self.selected_group_id = None;
        }
        self.remove_group_state(group_id);
        debug!(group_id = %group_id, "Left group");
        self.persist();
    }

    /// Replaces the group list with groups loaded from the backend.
    ///
    /// Duplicate ids keep their first occurrence. Per-group state of groups
    /// that are no longer listed is dropped, and so is a selection pointing at
    /// one of them.
    pub fn sync_groups(&mut self, groups: Vec<Group>) {
        let mut seen = HashSet::new();
        self.groups = groups
            .into_iter()
            .filter(|g| seen.insert(g.id.clone()))
            .collect();

        let known: HashSet<&GroupId> = self.groups.iter().map(|g| &g.id).collect();
        self.whiteboard_by_group.retain(|id, _| known.contains(id));
        self.plan_options_by_group.retain(|id, _| known.contains(id));
        self.selected_plan_id_by_group.retain(|id, _| known.contains(id));
        if let Some(selected) = &self.selected_group_id
            && !known.contains(selected)
        {
            self.selected_group_id = None;
        }

        debug!(count = self.groups.len(), "Synced groups");
        self.persist();
    }

    /// Installs a returning user and everything the backend knows about them.
    ///
    /// Groups whose latest stored plan has options get those options cached
    /// and move to `plan_options`. The first group is selected when nothing
    /// is selected yet.
    pub fn hydrate_from_user_info(&mut self, info: &UserInfoResponse) {
        self.set_current_user(User::from_backend(&info.user));
        self.sync_groups(info.groups.iter().map(Group::from_remote).collect());

        for remote in &info.groups {
            let Some(options) = remote.latest_plan_options() else {
                continue;
            };
            let group_id = GroupId::remote(&remote.id);
            // Both writes target a group synced just above.
            if let Err(e) = self.set_plan_options_for_group(&group_id, options) {
                warn!(group_id = %group_id, error = %e, "Failed to cache stored plan options");
                continue;
            }
            if let Err(e) = self.set_whiteboard_state(&group_id, WhiteboardPhase::PlanOptions) {
                debug!(group_id = %group_id, error = %e, "Keeping current whiteboard phase");
            }
        }

        if self.selected_group_id.is_none() {
            self.selected_group_id = self.groups.first().map(|g| g.id.clone());
        }

        info!(
            user_id = %info.user.id,
            groups = self.groups.len(),
            "Hydrated store from backend"
        );
        self.persist();
    }

    /// Re-keys a local placeholder group under the id the backend assigned.
    ///
    /// The group's whiteboard phase, plan options, plan selection and the
    /// group selection all follow the new id.
    pub fn adopt_remote_id(
        &mut self,
        local_id: &GroupId,
        remote_id: impl Into<String>,
    ) -> Result<GroupId> {
        let remote_id = GroupId::Remote(remote_id.into());
        if &remote_id == local_id {
            return Ok(remote_id);
        }
        if self.group(&remote_id).is_some() {
            return Err(TripboardError::DuplicateGroup {
                id: remote_id.to_string(),
            });
        }

        let group = self
            .groups
            .iter_mut()
            .find(|g| &g.id == local_id)
            .ok_or_else(|| TripboardError::unknown_group(local_id.as_str()))?;
        group.id = remote_id.clone();

        if let Some(phase) = self.whiteboard_by_group.remove(local_id) {
            self.whiteboard_by_group.insert(remote_id.clone(), phase);
        }
        if let Some(options) = self.plan_options_by_group.remove(local_id) {
            self.plan_options_by_group.insert(remote_id.clone(), options);
        }
        if let Some(plan_id) = self.selected_plan_id_by_group.remove(local_id) {
            self.selected_plan_id_by_group
                .insert(remote_id.clone(), plan_id);
        }
        if self.selected_group_id.as_ref() == Some(local_id) {
            self.selected_group_id = Some(remote_id.clone());
        }

        info!(local_id = %local_id, remote_id = %remote_id, "Adopted remote group id");
        self.persist();
        Ok(remote_id)
    }

    // ============================================================================
    // Whiteboard
    // ============================================================================

    /// Moves the group to `phase` if the workflow allows it.
    pub fn set_whiteboard_state(
        &mut self,
        group_id: &GroupId,
        phase: WhiteboardPhase,
    ) -> Result<()> {
        self.ensure_known(group_id)?;

        let current = self.whiteboard_phase(group_id);
        if !current.can_transition_to(phase) {
            return Err(TripboardError::InvalidTransition {
                group_id: group_id.to_string(),
                from: current.to_string(),
                to: phase.to_string(),
            });
        }

        debug!(group_id = %group_id, from = %current, to = %phase, "Whiteboard transition");
        self.whiteboard_by_group.insert(group_id.clone(), phase);
        self.persist();
        Ok(())
    }

    // ============================================================================
    // Plans
    // ============================================================================

    /// Replaces the group's plan options.
    ///
    /// A stored selection that no longer matches any of the new options is
    /// cleared; one that still matches is kept.
    pub fn set_plan_options_for_group(
        &mut self,
        group_id: &GroupId,
        plans: Vec<PlanOption>,
    ) -> Result<()> {
        self.ensure_known(group_id)?;

        if let Some(selected) = self.selected_plan_id_by_group.get(group_id)
            && !plans.iter().any(|p| &p.plan_id == selected)
        {
            debug!(group_id = %group_id, plan_id = %selected, "Clearing stale plan selection");
            self.selected_plan_id_by_group.remove(group_id);
        }

        debug!(group_id = %group_id, count = plans.len(), "Setting plan options");
        self.plan_options_by_group.insert(group_id.clone(), plans);
        self.persist();
        Ok(())
    }

    /// Records the selected plan. Membership in the current options is not
    /// checked; use [`Self::selected_plan`] to resolve it.
    pub fn select_plan_for_group(&mut self, group_id: &GroupId, plan_id: &str) -> Result<()> {
        self.ensure_known(group_id)?;

        debug!(group_id = %group_id, plan_id, "Selecting plan");
        self.selected_plan_id_by_group
            .insert(group_id.clone(), plan_id.to_string());
        self.persist();
        Ok(())
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn insert_group(&mut self, group: Group) {
        self.selected_group_id = Some(group.id.clone());
        self.whiteboard_by_group
            .insert(group.id.clone(), WhiteboardPhase::Gathering);
        self.groups.push(group);
    }

    fn remove_group_state(&mut self, group_id: &GroupId) {
        self.whiteboard_by_group.remove(group_id);
        self.plan_options_by_group.remove(group_id);
        self.selected_plan_id_by_group.remove(group_id);
    }

    fn ensure_known(&self, group_id: &GroupId) -> Result<()> {
        if self.group(group_id).is_some() {
            Ok(())
        } else {
            debug!(group_id = %group_id, "Rejecting write for unknown group");
            Err(TripboardError::unknown_group(group_id.as_str()))
        }
    }

    /// Writes the persisted subset when it changed since the last write.
    fn persist(&mut self) {
        let snapshot = PersistedState::new(self.current_user.as_deref().cloned());
        if self.last_persisted.as_ref() == Some(&snapshot) {
            return;
        }

        match self.repository.save_state(&snapshot) {
            Ok(()) => self.last_persisted = Some(snapshot),
            Err(e) => warn!(error = %e, "Failed to persist store state, keeping in-memory state"),
        }
    }
}
