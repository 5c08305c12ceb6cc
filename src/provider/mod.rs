use async_trait::async_trait;

use crate::catalog::{CALL_TO_ACTION_OPTIONS, PREVIEW_TEXT_OPTIONS, SUBJECT_LINE_OPTIONS};
use crate::errors::CampaignError;
use crate::wire::{Campaign, CampaignRequest};

/// A live content source. Implementations return the model's raw reply text;
/// mapping it into a [`Campaign`] is done by [`parse_reply`].
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;
    async fn generate(&self, req: &CampaignRequest) -> Result<String, CampaignError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// Maps a raw reply into a campaign. The reply must be a JSON object with all
/// four sections, either on its own or as the first `{...}` block in the text
/// that has the campaign shape.
pub fn parse_reply(text: &str) -> Result<Campaign, CampaignError> {
    let campaign = match serde_json::from_str::<Campaign>(text.trim()) {
        Ok(c) => c,
        Err(strict) => json_objects(text)
            .find_map(|obj| serde_json::from_str::<Campaign>(obj).ok())
            .ok_or_else(|| CampaignError::Reply(format!("no campaign object in reply ({strict})")))?,
    };
    check_shape(&campaign)?;
    Ok(campaign)
}

fn check_shape(c: &Campaign) -> Result<(), CampaignError> {
    let lists = [
        ("subjectLines", c.subject_lines.len(), SUBJECT_LINE_OPTIONS),
        ("previewText", c.preview_text.len(), PREVIEW_TEXT_OPTIONS),
        ("callToActions", c.call_to_actions.len(), CALL_TO_ACTION_OPTIONS),
    ];
    for (name, got, _want) in lists {
        if got == 0 {
            return Err(CampaignError::Reply(format!("{name} is empty")));
        }
    }
    if c.email_body.trim().is_empty() {
        return Err(CampaignError::Reply("emailBody is empty".into()));
    }
    for (name, got, want) in lists {
        if got != want {
            log::debug!("provider returned {got} {name}, templates produce {want}");
        }
    }
    Ok(())
}

/// Every balanced `{...}` substring, in order of its opening brace.
fn json_objects(s: &str) -> impl Iterator<Item = &str> + '_ {
    s.match_indices('{').filter_map(move |(start, _)| balanced_object(&s[start..]))
}

/// The object opening at the start of `s`. Braces inside JSON strings are skipped.
fn balanced_object(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
