//! Script-candidate priors provider (§4.C "Script-candidate priors").

use crate::consts::SCRIPT_PRIOR_BASE;
use crate::distribution::Distribution;
use crate::lang::data::{script_members, unique_script_lang};
use crate::providers::Provider;
use crate::script::ScriptCache;
use crate::token::Token;

#[derive(Default)]
pub struct ScriptPriorProvider;

impl Provider for ScriptPriorProvider {
    fn name(&self) -> &'static str {
        "script_prior"
    }

    fn probs(&self, tokens: &[Token], _cache: &ScriptCache) -> Vec<Distribution> {
        tokens
            .iter()
            .map(|t| {
                let mut d = Distribution::empty();
                if let Some(lang) = unique_script_lang(t.script) {
                    d.set(lang, 1.0);
                    return d;
                }
                let members = script_members(t.script);
                if members.is_empty() {
                    return d;
                }
                let scale = 0.5 + 0.5 * (t.len() as f32 / 8.0).min(1.0);
                let score = SCRIPT_PRIOR_BASE * scale;
                for &lang in members {
                    d.set(lang, score);
                }
                d
            })
            .collect()
    }
}
