pub mod candidate;
pub mod job;
pub mod score;

pub use candidate::{
    Candidate, CandidateCategories, CandidateSkills, CandidateStatus, ExperienceLevel,
    PersonalInfo, ProfessionalDetails,
};
pub use job::{ExperienceRange, Job, LocationType, SalaryRange};
pub use score::{
    ExperienceStatus, MatchDetails, MatchScore, Recommendation, SalaryAlignment, ScoreBreakdown,
};
