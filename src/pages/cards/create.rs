//! Card creation wizard.
//!
//! Steps never block: issues on a step show inline once the user has
//! left it. Creating still requires valid basic info.

use std::collections::HashSet;

use bizcard_core::card::{AdvancePolicy, FieldIssue, TemplateId};
use bizcard_core::{CardDraft, SavedCard, Wizard, WizardStep};
use bizcard_ui::{Alert, Button, ButtonVariant, Notice, ProgressBar, Severity, StepIndicator};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{
    BasicInfoForm, CardEdit, CardPreview, ContactInfoForm, DesignPanel, PageHeader, SharingForm,
    SocialLinksEditor,
};
use crate::context::{use_api, use_cancellation, use_customizer, use_notice, use_translator};

/// Issues to show on `step`: nothing until the step has been visited and
/// left.
fn visible_issues(
    step: WizardStep,
    visited: &HashSet<WizardStep>,
    draft: &CardDraft,
) -> Vec<FieldIssue> {
    if visited.contains(&step) {
        step.issues(draft)
    } else {
        Vec::new()
    }
}

#[component]
pub fn CreateCard(template: String) -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let customizer = use_customizer();
    let mut notice = use_notice();

    let mut wizard = use_signal(|| Wizard::new(AdvancePolicy::Lenient));
    let mut draft = use_signal(|| {
        let mut d = CardDraft::for_theme(customizer.peek().theme);
        if let Ok(id) = template.parse::<TemplateId>() {
            d.design.template = id;
        }
        d
    });
    let mut visited = use_signal(HashSet::<WizardStep>::new);
    let mut saving = use_signal(|| false);
    let mut created = use_signal(|| Option::<SavedCard>::None);

    let mut leave_step = move || {
        let step = wizard.peek().step();
        visited.write().insert(step);
    };

    let on_edit = move |edit: CardEdit| {
        if let Err(e) = edit.apply_to_draft(&mut draft.write()) {
            tracing::warn!("Rejected card edit: {}", e);
        }
    };

    let create = move |_| {
        let current = draft.read().clone();
        if let Err(issues) = Wizard::can_create(&current) {
            tracing::debug!(count = issues.len(), "Create refused, basic info incomplete");
            visited.write().insert(WizardStep::BasicInfo);
            wizard.write().go_to(WizardStep::BasicInfo);
            notice.set(Some(Notice::error(t.t("createCard.fixErrors"))));
            return;
        }
        saving.set(true);
        let api = api.clone();
        let cancel = cancel.clone();
        spawn(async move {
            match api.save_card(current, &cancel).await {
                Ok(card) => {
                    notice.set(Some(Notice::success(t.t("createCard.success"))));
                    created.set(Some(card));
                }
                Err(e) => {
                    if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                        notice.set(Some(n));
                    }
                }
            }
            saving.set(false);
        });
    };

    let step = wizard.read().step();
    let percent = wizard.read().progress_percent();
    let d = draft.read().clone();
    let issues = visible_issues(step, &visited.read(), &d);
    let titles: Vec<String> = WizardStep::all().iter().map(|s| t.t(s.title_key())).collect();
    let step_of = t.t_with(
        "createCard.stepOf",
        &[
            ("current", (step.index() + 1).to_string().as_str()),
            ("total", WizardStep::COUNT.to_string().as_str()),
        ],
    );

    rsx! {
        PageHeader { title: t.t("createCard.title"), subtitle: t.t("createCard.subtitle") }
        if let Some(card) = created() {
            Alert { severity: Severity::Success,
                {t.t("createCard.success")}
                " "
                Link { to: Route::PreviewCard { id: card.id.clone() }, {t.t("createCard.viewCard")} }
                " \u{00B7} "
                Link { to: Route::EditCard { id: card.id.clone() }, {t.t("createCard.editCard")} }
            }
        }
        div { class: "card wizard-card",
            StepIndicator {
                titles,
                current: step.index(),
                on_select: move |i: usize| {
                    if let Some(target) = WizardStep::from_index(i) {
                        leave_step();
                        wizard.write().go_to(target);
                    }
                },
            }
            ProgressBar { percent, label: step_of }
        }
        div { class: "editor-layout",
            div { class: "card editor-main",
                h3 { class: "card-title", {t.t(step.title_key())} }
                p { class: "text-secondary", {t.t(step.description_key())} }
                {
                    match step {
                        WizardStep::BasicInfo => rsx! {
                            BasicInfoForm { draft: d.clone(), issues: issues.clone(), on_edit }
                        },
                        WizardStep::ContactInfo => rsx! {
                            ContactInfoForm { draft: d.clone(), issues: issues.clone(), on_edit }
                        },
                        WizardStep::SocialLinks => rsx! {
                            SocialLinksEditor { links: d.social_links.clone(), issues: issues.clone(), on_edit }
                        },
                        WizardStep::Design => rsx! {
                            DesignPanel { draft: d.clone(), on_edit }
                        },
                        WizardStep::Preview => rsx! {
                            div { class: "wizard-final",
                                CardPreview { draft: d.clone() }
                                SharingForm { draft: d.clone(), on_edit }
                            }
                        },
                    }
                }
                div { class: "wizard-actions",
                    Button {
                        variant: ButtonVariant::Outlined,
                        disabled: step.is_first(),
                        onclick: move |_| {
                            leave_step();
                            wizard.write().previous();
                        },
                        {t.t("common.back")}
                    }
                    if step.is_last() {
                        Button { loading: saving(), onclick: create, {t.t("createCard.create")} }
                    } else {
                        Button {
                            onclick: move |_| {
                                leave_step();
                                let current = draft.read().clone();
                                wizard.write().next(&current);
                            },
                            {t.t("common.next")}
                        }
                    }
                }
            }
            if step != WizardStep::Preview {
                aside { class: "editor-preview",
                    h4 { {t.t("preview.title")} }
                    CardPreview { draft: d.clone(), scale: 0.9 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issues_hidden_until_step_left() {
        let draft = CardDraft::default();
        let mut visited = HashSet::new();
        assert!(visible_issues(WizardStep::BasicInfo, &visited, &draft).is_empty());

        visited.insert(WizardStep::BasicInfo);
        let issues = visible_issues(WizardStep::BasicInfo, &visited, &draft);
        assert!(!issues.is_empty());
    }

    #[test]
    fn test_lenient_wizard_moves_past_invalid_step() {
        let mut wizard = Wizard::new(AdvancePolicy::Lenient);
        let draft = CardDraft::default();
        wizard.next(&draft);
        assert_eq!(wizard.step(), WizardStep::ContactInfo);
        assert!(Wizard::can_create(&draft).is_err());
    }
}
