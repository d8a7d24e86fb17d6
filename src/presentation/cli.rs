// Command line definition
use bpaf::Bpaf;
use screenboard_client::application::screenboard_repository::ScreenboardId;
use std::path::PathBuf;

#[derive(Clone, Debug, Bpaf)]
#[bpaf(options, version, descr(env!("CARGO_PKG_DESCRIPTION")))]
pub struct Cli {
    #[bpaf(external(command))]
    pub command: Command,
}

#[derive(Clone, Debug, Bpaf)]
pub enum Command {
    /// Print a sample board document; needs no credentials
    #[bpaf(command)]
    Sample,
    /// Create a screenboard and print its id
    #[bpaf(command)]
    Create {
        /// Board document to upload
        #[bpaf(positional("FILE"))]
        file: PathBuf,
    },
    /// Replace an existing screenboard
    #[bpaf(command)]
    Update {
        #[bpaf(positional("ID"))]
        id: ScreenboardId,
        /// Board document to upload
        #[bpaf(positional("FILE"))]
        file: PathBuf,
    },
    /// Delete a screenboard; deleting a missing board is not an error
    #[bpaf(command)]
    Delete {
        #[bpaf(positional("ID"))]
        id: ScreenboardId,
    },
    /// Print a screenboard as JSON
    #[bpaf(command)]
    Get {
        #[bpaf(positional("ID"))]
        id: ScreenboardId,
    },
    /// Print the public URL of a screenboard
    #[bpaf(command)]
    Share {
        #[bpaf(positional("ID"))]
        id: ScreenboardId,
    },
}
