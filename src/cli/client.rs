//! Client CLI commands

use clap::Subcommand;

use crate::error::BizbookResult;
use crate::services::ClientService;
use crate::storage::Storage;

/// Client subcommands
#[derive(Subcommand, Debug)]
pub enum ClientCommands {
    /// List all clients
    List,

    /// Add a new client
    Add {
        /// Client name
        name: String,
        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
        /// Contact phone
        #[arg(short, long)]
        phone: Option<String>,
        /// Postal address
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Delete a client
    Delete {
        /// Client name or ID
        client: String,
    },
}

/// Handle a client command
pub fn handle_client_command(storage: &Storage, cmd: ClientCommands) -> BizbookResult<()> {
    let service = ClientService::new(storage);

    match cmd {
        ClientCommands::List => {
            let clients = service.list()?;
            for client in &clients {
                let email = client.email.as_deref().unwrap_or("-");
                let phone = client.phone.as_deref().unwrap_or("-");
                println!("{:<24} {:<28} {}", client.name, email, phone);
            }
            println!("\n{} client(s)", clients.len());
        }

        ClientCommands::Add {
            name,
            email,
            phone,
            address,
        } => {
            let client = service.create(&name, email, phone, address)?;
            println!("Created client: {}", client.name);
            println!("  ID: {}", client.id.as_uuid());
        }

        ClientCommands::Delete { client } => {
            service.delete(&client)?;
            println!("Deleted client: {}", client);
        }
    }

    Ok(())
}
