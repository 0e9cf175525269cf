use super::utils::{finding_data, in_scope, location};
use crate::fingerprint::fingerprint_for_reference;
use crate::model::ReferenceModel;
use crate::policy::EffectiveConfig;
use symguard_types::{Finding, ids};

pub fn run(model: &ReferenceModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_SYMBOLS_FORBIDDEN) else {
        return;
    };
    let allowlist = cfg.rules.modes().symbols_allowlist;

    for unit in model.units.iter().filter(|u| in_scope(u, cfg)) {
        for reference in &unit.symbols {
            let Some(diag) = cfg.rules.check_symbol(reference) else {
                continue;
            };

            let (code, help) = match diag.decision.replacement() {
                Some(replacement) => (
                    ids::CODE_REPLACEABLE_SYMBOL,
                    format!("Use {replacement} at this call site."),
                ),
                None => (
                    ids::CODE_FORBIDDEN_SYMBOL,
                    "Stop referring to this symbol.".to_string(),
                ),
            };

            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_SYMBOLS_FORBIDDEN.to_string(),
                code: code.to_string(),
                fingerprint: Some(fingerprint_for_reference(
                    ids::CHECK_SYMBOLS_FORBIDDEN,
                    code,
                    unit.path.as_str(),
                    &diag.decision.subject,
                )),
                data: finding_data(&diag.decision, allowlist, None),
                message: diag.message,
                location: Some(location(unit, diag.span)),
                help: Some(help),
            });
        }
    }
}
