use elide_core::RetentionPolicy;
use elide_oracle::OracleTransform;
use elide_pipeline::{size, Pipeline};
use std::path::Path;

pub fn run(
    policy: RetentionPolicy,
    input: Option<&Path>,
    output: Option<&Path>,
    api_key: Option<String>,
    model: Option<String>,
) -> anyhow::Result<()> {
    let blob = super::read_bytes(input)?;

    let mut transform = OracleTransform::new(api_key)?;
    if let Some(model) = model {
        transform = transform.with_model(model);
    }
    let text = Pipeline::with_transform(transform).decompress(policy, &blob)?;

    eprintln!(
        "{} policy: {} bytes in, {} bytes out",
        policy,
        size(&blob),
        size(&text)
    );
    super::write_bytes(output, text.as_bytes())
}
