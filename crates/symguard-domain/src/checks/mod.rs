use crate::model::ReferenceModel;
use crate::policy::EffectiveConfig;
use symguard_types::Finding;

pub(crate) mod imports;
pub(crate) mod symbols;
pub(crate) mod utils;

#[cfg(test)]
mod tests;

pub fn run_all(model: &ReferenceModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    imports::run(model, cfg, out);
    symbols::run(model, cfg, out);
}
