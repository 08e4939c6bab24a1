//! `campus render`: drive the client store over the sample directory and
//! print the resulting markup.

use anyhow::{Context, Result};
use campus_core::{seed_sample, CampusId, CampusRepository, MemoryRepository};
use campus_state::{campus_list, fetch_campus, fetch_campuses, single_campus, Store};
use clap::Args;

/// Arguments for `campus render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Render one campus with its roster instead of the campus list.
    #[arg(long)]
    pub campus: Option<i64>,
}

/// Seed an in-memory directory, load it through the store and render.
pub async fn render_sample(campus: Option<CampusId>) -> Result<String> {
    let repo = MemoryRepository::new();
    seed_sample(&repo).await.context("failed to seed sample directory")?;

    let store = Store::new();
    let state = fetch_campuses(&store, &repo).await?;

    let Some(id) = campus else {
        return Ok(campus_list(state.campuses.as_slice()).to_string());
    };

    let state = fetch_campus(&store, &repo, id).await?;
    let selected = state
        .selected_campus
        .as_ref()
        .with_context(|| format!("{id} was not selected"))?;
    let roster = repo.list_students_by_campus(id).await?;
    Ok(single_campus(selected, &roster).to_string())
}

pub fn run_render(args: &RenderArgs) -> Result<u8> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let markup = runtime.block_on(render_sample(args.campus.map(CampusId)))?;
    println!("{markup}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_campus_list() {
        let markup = render_sample(None).await.unwrap();
        assert_eq!(markup, "<ul><li>Grace Hopper</li><li>Flex</li></ul>");
    }

    #[tokio::test]
    async fn renders_single_campus_roster() {
        let markup = render_sample(Some(CampusId(1))).await.unwrap();
        assert!(markup.starts_with("<div><h2>Grace Hopper</h2><ul>"));
        assert!(markup.contains("Terry Witz"));
        assert!(markup.contains("Yuval Ivana"));
        assert!(!markup.contains("Gaby Medina"));
    }

    #[tokio::test]
    async fn unknown_campus_is_an_error() {
        let err = render_sample(Some(CampusId(99))).await.unwrap_err();
        assert!(err.to_string().contains("campus:99"));
    }
}
