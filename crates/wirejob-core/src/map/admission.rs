use taskvisor::AdmissionPolicy;
use wirejob_model::AdmissionStrategy;

pub fn to_admission_policy(s: AdmissionStrategy) -> AdmissionPolicy {
    match s {
        AdmissionStrategy::DropIfRunning => AdmissionPolicy::DropIfRunning,
        AdmissionStrategy::Replace => AdmissionPolicy::Replace,
        AdmissionStrategy::Queue => AdmissionPolicy::Queue,
    }
}
