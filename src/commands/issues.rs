use crate::cli::IssuesArgs;
use crate::client::Transport;
use crate::error::Result;
use crate::output;
use crate::pagination::PaginationController;
use crate::types::RepoPath;

pub async fn list<T: Transport>(
    controller: &mut PaginationController<T>,
    path: RepoPath,
    args: &IssuesArgs,
) -> Result<()> {
    let max_pages = if args.all {
        None
    } else {
        Some(args.pages as usize)
    };

    let state = controller.fetch_all(path, max_pages).await?;
    output::print_state(&state);

    Ok(())
}
