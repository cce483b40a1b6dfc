//! Filter and active-selection state over a comparison list
//!
//! Plain in-memory state scoped to one comparison session. Every
//! transition re-derives the visible subset and reconciles the active
//! selection, keeping one invariant: the active name is `None` exactly
//! when nothing is visible, and otherwise names a visible record.

use crate::compare::CompareTemplate;

/// Selection state over a comparison list
#[derive(Debug, Default)]
pub struct SelectionState {
    templates: Vec<CompareTemplate>,
    filter: String,
    active: Option<String>,
}

impl SelectionState {
    /// Create an empty selection state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the comparison list (e.g. a reference version finished
    /// loading), keeping the current filter and reconciling the selection
    pub fn set_templates(&mut self, templates: Vec<CompareTemplate>) {
        self.templates = templates;
        self.reconcile_active();
    }

    /// Update the free-text filter and reconcile the selection
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.reconcile_active();
    }

    /// Explicitly select a visible record by name.
    ///
    /// Selecting a name that is not currently visible is a no-op;
    /// returns whether the selection was applied.
    pub fn select(&mut self, name: &str) -> bool {
        if self.visible().iter().any(|t| t.name == name) {
            self.active = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// The full comparison list, ignoring the filter
    pub fn templates(&self) -> &[CompareTemplate] {
        &self.templates
    }

    /// The records matching the current filter, in list order
    pub fn visible(&self) -> Vec<&CompareTemplate> {
        if self.filter.is_empty() {
            return self.templates.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.search_key().contains(&needle))
            .collect()
    }

    /// Name of the active record, if any
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active record itself, if any
    pub fn active(&self) -> Option<&CompareTemplate> {
        let name = self.active.as_deref()?;
        self.templates.iter().find(|t| t.name == name)
    }

    /// Current filter text
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Keep the active selection if still visible, otherwise jump to the
    /// first visible record, otherwise clear it
    fn reconcile_active(&mut self) {
        let visible = self.visible();
        let keep = match self.active.as_deref() {
            Some(name) => visible.iter().any(|t| t.name == name),
            None => false,
        };
        if !keep {
            let first = visible.first().map(|t| t.name.clone());
            self.active = first;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::CompareStatus;
    use crate::template::TemplateKind;

    fn tmpl(name: &str, kinds: &[&str]) -> CompareTemplate {
        CompareTemplate {
            name: name.to_string(),
            file_name: name.split('.').next().unwrap_or(name).to_string(),
            kind: TemplateKind::Template,
            resource_kinds: kinds.iter().map(|k| k.to_string()).collect(),
            content: String::new(),
            compare_content: String::new(),
            status: CompareStatus::Modified,
        }
    }

    fn eight_templates() -> Vec<CompareTemplate> {
        vec![
            tmpl("configmap.yaml", &["ConfigMap"]),
            tmpl("deployment.yaml", &["Deployment"]),
            tmpl("ingress.yaml", &["Ingress"]),
            tmpl("metrics-service.yaml", &["Service"]),
            tmpl("rbac.yaml", &["Role", "RoleBinding"]),
            tmpl("secret.yaml", &["Secret"]),
            tmpl("servicemonitor.yaml", &["ServiceMonitor"]),
            tmpl("statefulset.yaml", &["StatefulSet"]),
        ]
    }

    #[test]
    fn test_new_list_activates_first_record() {
        let mut state = SelectionState::new();
        assert!(state.active_name().is_none());

        state.set_templates(eight_templates());
        assert_eq!(state.active_name(), Some("configmap.yaml"));
        assert_eq!(state.visible().len(), 8);
    }

    #[test]
    fn test_filter_matches_name_substring() {
        let mut state = SelectionState::new();
        state.set_templates(eight_templates());
        state.set_filter("service");

        let names: Vec<&str> = state.visible().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["metrics-service.yaml", "servicemonitor.yaml"]);
    }

    #[test]
    fn test_filter_matches_resource_kind_case_insensitively() {
        let mut state = SelectionState::new();
        state.set_templates(eight_templates());
        state.set_filter("ROLEBIND");

        let names: Vec<&str> = state.visible().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["rbac.yaml"]);
        assert_eq!(state.active_name(), Some("rbac.yaml"));
    }

    #[test]
    fn test_active_kept_when_still_visible() {
        let mut state = SelectionState::new();
        state.set_templates(eight_templates());
        assert!(state.select("servicemonitor.yaml"));

        state.set_filter("service");
        assert_eq!(state.active_name(), Some("servicemonitor.yaml"));
    }

    #[test]
    fn test_active_jumps_to_first_when_filtered_out() {
        let mut state = SelectionState::new();
        state.set_templates(eight_templates());
        assert!(state.select("secret.yaml"));

        state.set_filter("service");
        assert_eq!(state.active_name(), Some("metrics-service.yaml"));
    }

    #[test]
    fn test_active_cleared_when_nothing_matches() {
        let mut state = SelectionState::new();
        state.set_templates(eight_templates());
        state.set_filter("nomatch");

        assert!(state.visible().is_empty());
        assert!(state.active_name().is_none());

        // Relaxing the filter brings the selection back
        state.set_filter("");
        assert_eq!(state.active_name(), Some("configmap.yaml"));
    }

    #[test]
    fn test_selecting_hidden_record_is_a_no_op() {
        let mut state = SelectionState::new();
        state.set_templates(eight_templates());
        state.set_filter("service");

        assert!(!state.select("secret.yaml"));
        assert_eq!(state.active_name(), Some("metrics-service.yaml"));
    }

    #[test]
    fn test_invariant_holds_across_transition_sequences() {
        let mut state = SelectionState::new();
        let check = |state: &SelectionState| {
            let visible = state.visible();
            match state.active_name() {
                None => assert!(visible.is_empty()),
                Some(name) => assert!(visible.iter().any(|t| t.name == name)),
            }
        };

        check(&state);
        state.set_templates(eight_templates());
        check(&state);
        state.set_filter("yaml");
        check(&state);
        state.select("ingress.yaml");
        check(&state);
        state.set_filter("zzz");
        check(&state);
        state.set_templates(vec![tmpl("only.yaml", &[])]);
        check(&state);
        state.set_filter("");
        check(&state);
        state.set_templates(Vec::new());
        check(&state);
    }

    #[test]
    fn test_list_swap_keeps_active_if_present_in_new_list() {
        let mut state = SelectionState::new();
        state.set_templates(eight_templates());
        state.select("rbac.yaml");

        state.set_templates(vec![tmpl("rbac.yaml", &["Role"]), tmpl("new.yaml", &[])]);
        assert_eq!(state.active_name(), Some("rbac.yaml"));

        state.set_templates(vec![tmpl("other.yaml", &[])]);
        assert_eq!(state.active_name(), Some("other.yaml"));
    }
}
