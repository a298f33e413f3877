//! Team list state and the join form state machine.

use crate::core::scope::Scope;
use crate::features::todos::state::TodoListState;
use std::collections::{BTreeMap, BTreeSet};
use teamdo_api_models::{Team, TeamId};

/// Join-by-code form state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinState {
    /// Waiting for a code.
    #[default]
    Unjoined,
    /// Request outstanding.
    Pending,
    /// Server accepted the code; a reload follows.
    Joined,
}

/// Teams view state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamsState {
    /// Team cards, newest created first once prepended.
    pub teams: Vec<Team>,
    /// Todo sublist per team.
    pub lists: BTreeMap<TeamId, TodoListState>,
    /// Teams whose sublist is expanded.
    pub expanded: BTreeSet<TeamId>,
    /// Join form state.
    pub join: JoinState,
    /// Translation key of an error shown above the cards.
    pub inline_error: Option<&'static str>,
    /// Whether the team list loaded at least once.
    pub loaded: bool,
}

impl TeamsState {
    /// Replace the cards, keeping sublists of teams that are still present.
    pub fn replace_teams(&mut self, teams: Vec<Team>) {
        self.lists.retain(|id, _| teams.iter().any(|team| team.id == *id));
        self.expanded
            .retain(|id| teams.iter().any(|team| team.id == *id));
        for team in &teams {
            self.lists
                .entry(team.id)
                .or_insert_with(|| TodoListState::new(Scope::Team(team.id)));
        }
        self.teams = teams;
        self.inline_error = None;
        self.loaded = true;
    }

    /// Insert a freshly created team at the top.
    pub fn prepend(&mut self, team: Team) {
        self.teams.retain(|existing| existing.id != team.id);
        self.lists
            .entry(team.id)
            .or_insert_with(|| TodoListState::new(Scope::Team(team.id)));
        self.teams.insert(0, team);
    }

    /// Drop a team card and its sublist.
    pub fn remove(&mut self, id: TeamId) {
        self.teams.retain(|team| team.id != id);
        self.lists.remove(&id);
        self.expanded.remove(&id);
    }

    /// Take team-level fields from `next`, keeping this state's sublists.
    ///
    /// Used when a team-level operation ran on a snapshot while sublists kept changing.
    pub fn merge_cards(&mut self, next: Self) {
        let Self {
            teams,
            lists,
            join,
            inline_error,
            loaded,
            ..
        } = next;
        self.lists
            .retain(|id, _| teams.iter().any(|team| team.id == *id));
        self.expanded
            .retain(|id| teams.iter().any(|team| team.id == *id));
        for (id, list) in lists {
            self.lists.entry(id).or_insert(list);
        }
        self.teams = teams;
        self.join = join;
        self.inline_error = inline_error;
        self.loaded = loaded;
    }

    /// Sublist of a team.
    #[must_use]
    pub fn list(&self, id: TeamId) -> Option<&TodoListState> {
        self.lists.get(&id)
    }

    /// Sublist of a team, created on first use.
    pub fn list_mut(&mut self, id: TeamId) -> &mut TodoListState {
        self.lists
            .entry(id)
            .or_insert_with(|| TodoListState::new(Scope::Team(id)))
    }

    /// Flip whether a team's sublist is shown; returns the new visibility.
    pub fn toggle_expanded(&mut self, id: TeamId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{team, todo};

    #[test]
    fn replace_keeps_surviving_sublists() {
        let mut state = TeamsState::default();
        state.replace_teams(vec![team(1, "a", "A"), team(2, "b", "B")]);
        state.list_mut(1).replace(vec![todo(10, "x", false)]);
        state.toggle_expanded(2);

        state.replace_teams(vec![team(1, "a", "A")]);
        assert_eq!(state.list(1).map(|list| list.items.len()), Some(1));
        assert!(state.list(2).is_none());
        assert!(state.expanded.is_empty());
    }

    #[test]
    fn prepend_puts_new_team_first() {
        let mut state = TeamsState::default();
        state.replace_teams(vec![team(1, "a", "A")]);
        state.prepend(team(5, "new", "N"));
        let ids: Vec<_> = state.teams.iter().map(|team| team.id).collect();
        assert_eq!(ids, vec![5, 1]);
        assert_eq!(state.list(5).map(|list| list.scope), Some(Scope::Team(5)));
    }

    #[test]
    fn merge_keeps_newer_sublists() {
        let mut live = TeamsState::default();
        live.replace_teams(vec![team(1, "a", "A")]);
        let mut snapshot = live.clone();
        live.list_mut(1).replace(vec![todo(3, "fresh", false)]);

        snapshot.prepend(team(2, "b", "B"));
        snapshot.join = JoinState::Joined;
        live.merge_cards(snapshot);

        assert_eq!(live.teams.len(), 2);
        assert_eq!(live.join, JoinState::Joined);
        assert_eq!(live.list(1).map(|list| list.items.len()), Some(1));
        assert!(live.list(2).is_some());
    }

    #[test]
    fn remove_drops_card_and_sublist() {
        let mut state = TeamsState::default();
        state.replace_teams(vec![team(1, "a", "A"), team(2, "b", "B")]);
        assert!(state.toggle_expanded(1));
        state.remove(1);
        assert_eq!(state.teams.len(), 1);
        assert!(state.list(1).is_none());
        assert!(!state.expanded.contains(&1));
    }
}
