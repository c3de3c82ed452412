use elide_core::{RetentionPolicy, RuleTransform};
use elide_oracle::OracleTransform;
use elide_pipeline::{size, Pipeline};
use std::path::Path;

pub fn run(
    policy: RetentionPolicy,
    input: Option<&Path>,
    output: Option<&Path>,
    api_key: Option<String>,
    model: Option<String>,
    offline: bool,
) -> anyhow::Result<()> {
    let text = super::read_text(input)?;

    let blob = if offline {
        Pipeline::with_transform(RuleTransform).compress(policy, &text)?
    } else {
        let mut transform = OracleTransform::new(api_key)?;
        if let Some(model) = model {
            transform = transform.with_model(model);
        }
        Pipeline::with_transform(transform).compress(policy, &text)?
    };

    eprintln!(
        "{} policy: {} bytes in, {} bytes out",
        policy,
        size(&text),
        size(&blob)
    );
    super::write_bytes(output, &blob)
}
