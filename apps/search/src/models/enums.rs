//! Enumerations stored as lower-case text columns.

use crate::caller::UserRole;
use catalog_query::Value;
use serde::{Deserialize, Serialize};

pub trait StoredEnum: Copy {
    fn as_str(self) -> &'static str;
}

/// Stored forms of `items`, as query values.
pub fn stored_values<T: StoredEnum>(items: &[T]) -> Vec<Value> {
    items.iter().map(|item| Value::from(item.as_str())).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    Inactive,
    Deleted,
}

impl StoredEnum for Status {
    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Active,
    AutonomousEmployment,
    Deleted,
    Draft,
    Employed,
    Incomplete,
    Ineligible,
    Pending,
    Unreachable,
    Withdrawn,
}

impl StoredEnum for CandidateStatus {
    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::AutonomousEmployment => "autonomous_employment",
            Self::Deleted => "deleted",
            Self::Draft => "draft",
            Self::Employed => "employed",
            Self::Incomplete => "incomplete",
            Self::Ineligible => "ineligible",
            Self::Pending => "pending",
            Self::Unreachable => "unreachable",
            Self::Withdrawn => "withdrawn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl StoredEnum for Gender {
    fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhcrStatus {
    MandateRefugee,
    RegisteredAsylum,
    RegisteredStateless,
    RegisteredStatusUnknown,
    NotRegistered,
    Unsure,
    NotApplicable,
}

impl StoredEnum for UnhcrStatus {
    fn as_str(self) -> &'static str {
        match self {
            Self::MandateRefugee => "mandate_refugee",
            Self::RegisteredAsylum => "registered_asylum",
            Self::RegisteredStateless => "registered_stateless",
            Self::RegisteredStatusUnknown => "registered_status_unknown",
            Self::NotRegistered => "not_registered",
            Self::Unsure => "unsure",
            Self::NotApplicable => "not_applicable",
        }
    }
}

/// Sales stage of a job opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStage {
    Prospect,
    Briefing,
    PitchingToCandidates,
    Mou,
    CandidateSearch,
    VisaEligibility,
    CvPreparation,
    CvReview,
    RecruitmentProcess,
    JobOffer,
    VisaPreparation,
    PostHireEngagement,
    HiringCompleted,
    IneligibleEmployer,
    IneligibleOccupation,
    NoInterest,
    NoJobOffer,
    TooExpensive,
}

impl StoredEnum for JobStage {
    fn as_str(self) -> &'static str {
        match self {
            Self::Prospect => "prospect",
            Self::Briefing => "briefing",
            Self::PitchingToCandidates => "pitching_to_candidates",
            Self::Mou => "mou",
            Self::CandidateSearch => "candidate_search",
            Self::VisaEligibility => "visa_eligibility",
            Self::CvPreparation => "cv_preparation",
            Self::CvReview => "cv_review",
            Self::RecruitmentProcess => "recruitment_process",
            Self::JobOffer => "job_offer",
            Self::VisaPreparation => "visa_preparation",
            Self::PostHireEngagement => "post_hire_engagement",
            Self::HiringCompleted => "hiring_completed",
            Self::IneligibleEmployer => "ineligible_employer",
            Self::IneligibleOccupation => "ineligible_occupation",
            Self::NoInterest => "no_interest",
            Self::NoJobOffer => "no_job_offer",
            Self::TooExpensive => "too_expensive",
        }
    }
}

/// Progress of one candidate through one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    Prospect,
    MiniIntake,
    FullIntake,
    VisaEligibility,
    CvPreparation,
    CvReview,
    Testing,
    Interview,
    Offer,
    Acceptance,
    VisaPreparation,
    Relocating,
    Relocated,
    Settled,
    NotFitForRole,
    NotEligibleForVisa,
    NoJobOffer,
    CandidateWithdraws,
    EmployerRejectsCandidate,
}

impl StoredEnum for OpportunityStage {
    fn as_str(self) -> &'static str {
        match self {
            Self::Prospect => "prospect",
            Self::MiniIntake => "mini_intake",
            Self::FullIntake => "full_intake",
            Self::VisaEligibility => "visa_eligibility",
            Self::CvPreparation => "cv_preparation",
            Self::CvReview => "cv_review",
            Self::Testing => "testing",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Acceptance => "acceptance",
            Self::VisaPreparation => "visa_preparation",
            Self::Relocating => "relocating",
            Self::Relocated => "relocated",
            Self::Settled => "settled",
            Self::NotFitForRole => "not_fit_for_role",
            Self::NotEligibleForVisa => "not_eligible_for_visa",
            Self::NoJobOffer => "no_job_offer",
            Self::CandidateWithdraws => "candidate_withdraws",
            Self::EmployerRejectsCandidate => "employer_rejects_candidate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavedSearchType {
    Profession,
    Job,
    Other,
}

impl StoredEnum for SavedSearchType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Profession => "profession",
            Self::Job => "job",
            Self::Other => "other",
        }
    }
}

impl StoredEnum for UserRole {
    fn as_str(self) -> &'static str {
        match self {
            Self::SystemAdmin => "system_admin",
            Self::Admin => "admin",
            Self::PartnerAdmin => "partner_admin",
            Self::SemiLimited => "semi_limited",
            Self::Limited => "limited",
            Self::ReadOnly => "read_only",
        }
    }
}
