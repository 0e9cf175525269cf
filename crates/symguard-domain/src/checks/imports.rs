use super::utils::{finding_data, in_scope, location};
use crate::fingerprint::fingerprint_for_reference;
use crate::model::ReferenceModel;
use crate::policy::EffectiveConfig;
use symguard_types::{Finding, ids};

pub fn run(model: &ReferenceModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_IMPORTS_FORBIDDEN) else {
        return;
    };
    let allowlist = cfg.rules.modes().packages_allowlist;

    for unit in model.units.iter().filter(|u| in_scope(u, cfg)) {
        for reference in &unit.imports {
            let Some(diag) = cfg.rules.check_module(reference) else {
                continue;
            };

            let (code, help) = match diag.decision.replacement() {
                Some(replacement) => (
                    ids::CODE_REPLACEABLE_IMPORT,
                    format!("Import {replacement} instead."),
                ),
                None if allowlist => (
                    ids::CODE_FORBIDDEN_IMPORT,
                    "Only modules listed in [packages] may be imported.".to_string(),
                ),
                None => (
                    ids::CODE_FORBIDDEN_IMPORT,
                    "Remove this import.".to_string(),
                ),
            };

            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_IMPORTS_FORBIDDEN.to_string(),
                code: code.to_string(),
                fingerprint: Some(fingerprint_for_reference(
                    ids::CHECK_IMPORTS_FORBIDDEN,
                    code,
                    unit.path.as_str(),
                    &diag.decision.subject,
                )),
                data: finding_data(&diag.decision, allowlist, diag.suggested_edit.as_ref()),
                message: diag.message,
                location: Some(location(unit, diag.span)),
                help: Some(help),
            });
        }
    }
}
