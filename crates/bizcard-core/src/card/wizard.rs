//! Step sequencing for the card creation wizard.

use serde::{Deserialize, Serialize};

use super::draft::CardDraft;
use super::validation::{basic_info_issues, contact_issues, social_issues, FieldIssue};

/// Wizard steps in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    BasicInfo,
    ContactInfo,
    SocialLinks,
    Design,
    Preview,
}

impl WizardStep {
    pub const COUNT: usize = 5;

    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::BasicInfo,
            WizardStep::ContactInfo,
            WizardStep::SocialLinks,
            WizardStep::Design,
            WizardStep::Preview,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 0,
            WizardStep::ContactInfo => 1,
            WizardStep::SocialLinks => 2,
            WizardStep::Design => 3,
            WizardStep::Preview => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        WizardStep::all().get(index).copied()
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "createCard.steps.basicInfo",
            WizardStep::ContactInfo => "createCard.steps.contactInfo",
            WizardStep::SocialLinks => "createCard.steps.socialLinks",
            WizardStep::Design => "createCard.steps.design",
            WizardStep::Preview => "createCard.steps.preview",
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "createCard.steps.basicInfoDesc",
            WizardStep::ContactInfo => "createCard.steps.contactInfoDesc",
            WizardStep::SocialLinks => "createCard.steps.socialLinksDesc",
            WizardStep::Design => "createCard.steps.designDesc",
            WizardStep::Preview => "createCard.steps.previewDesc",
        }
    }

    /// Next step, or `self` on the last step.
    pub fn next(self) -> WizardStep {
        WizardStep::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Previous step, or `self` on the first step.
    pub fn previous(self) -> WizardStep {
        self.index()
            .checked_sub(1)
            .and_then(WizardStep::from_index)
            .unwrap_or(self)
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.index() + 1 == Self::COUNT
    }

    /// Completion percentage shown in the progress bar.
    pub fn progress_percent(&self) -> u8 {
        ((self.index() + 1) as f64 / Self::COUNT as f64 * 100.0).round() as u8
    }

    /// Validation issues that belong to this step.
    pub fn issues(&self, draft: &CardDraft) -> Vec<FieldIssue> {
        match self {
            WizardStep::BasicInfo => basic_info_issues(draft),
            WizardStep::ContactInfo => contact_issues(draft),
            WizardStep::SocialLinks => social_issues(draft),
            WizardStep::Design | WizardStep::Preview => Vec::new(),
        }
    }
}

/// Whether step validation blocks `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvancePolicy {
    /// Issues are shown but never block.
    #[default]
    Lenient,
    /// `next` is refused while the current step has issues.
    Strict,
}

/// Outcome of a step change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(WizardStep),
    Blocked(Vec<FieldIssue>),
    AtEnd,
}

/// Wizard state: the current step and its gating policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wizard {
    step: WizardStep,
    policy: AdvancePolicy,
}

impl Wizard {
    pub fn new(policy: AdvancePolicy) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            policy,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    pub fn next(&mut self, draft: &CardDraft) -> Advance {
        if self.step.is_last() {
            return Advance::AtEnd;
        }
        if self.policy == AdvancePolicy::Strict {
            let issues = self.step.issues(draft);
            if !issues.is_empty() {
                tracing::debug!(step = ?self.step, count = issues.len(), "Wizard step blocked");
                return Advance::Blocked(issues);
            }
        }
        self.step = self.step.next();
        Advance::Moved(self.step)
    }

    pub fn previous(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Jump directly to a step (clicking the step indicator).
    pub fn go_to(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn progress_percent(&self) -> u8 {
        self.step.progress_percent()
    }

    /// Check that the draft can be submitted. Basic info must be valid
    /// regardless of policy.
    pub fn can_create(draft: &CardDraft) -> Result<(), Vec<FieldIssue>> {
        let issues = basic_info_issues(draft);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CardDraft {
        let mut d = CardDraft::default();
        d.first_name = "Sara".into();
        d.last_name = "Ali".into();
        d.job_title = "Engineer".into();
        d.company = "Acme".into();
        d
    }

    #[test]
    fn test_step_navigation_saturates() {
        assert_eq!(WizardStep::BasicInfo.previous(), WizardStep::BasicInfo);
        assert_eq!(WizardStep::Preview.next(), WizardStep::Preview);
        assert_eq!(WizardStep::ContactInfo.next(), WizardStep::SocialLinks);
    }

    #[test]
    fn test_progress_percent() {
        let got: Vec<u8> = WizardStep::all().iter().map(|s| s.progress_percent()).collect();
        assert_eq!(got, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn test_lenient_advances_with_issues() {
        let mut wizard = Wizard::default();
        let draft = CardDraft::default();
        assert_eq!(wizard.next(&draft), Advance::Moved(WizardStep::ContactInfo));
    }

    #[test]
    fn test_strict_blocks_on_issues() {
        let mut wizard = Wizard::new(AdvancePolicy::Strict);
        let draft = CardDraft::default();
        match wizard.next(&draft) {
            Advance::Blocked(issues) => assert!(!issues.is_empty()),
            other => panic!("expected block, got {other:?}"),
        }
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert_eq!(wizard.next(&valid_draft()), Advance::Moved(WizardStep::ContactInfo));
    }

    #[test]
    fn test_next_at_end() {
        let mut wizard = Wizard::default();
        wizard.go_to(WizardStep::Preview);
        assert_eq!(wizard.next(&valid_draft()), Advance::AtEnd);
        assert_eq!(wizard.previous(), WizardStep::Design);
    }

    #[test]
    fn test_can_create_requires_basic_info() {
        assert!(Wizard::can_create(&CardDraft::default()).is_err());
        assert!(Wizard::can_create(&valid_draft()).is_ok());
    }
}
