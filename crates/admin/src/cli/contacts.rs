use clap::{Args, Subcommand};
use tabled::{builder::Builder, settings::Style};
use utsav_admin::domain::contacts::models::NewContact;

use crate::cli::{ApiArgs, warn_if_fallback};

#[derive(Debug, Args)]
pub(crate) struct ContactsCommand {
    #[command(subcommand)]
    command: ContactsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContactsSubcommand {
    /// List all contacts
    List(ListContactsArgs),
    /// Add a new contact
    Add(AddContactArgs),
}

#[derive(Debug, Args)]
struct ListContactsArgs {
    #[command(flatten)]
    api: ApiArgs,
}

#[derive(Debug, Args)]
struct AddContactArgs {
    #[command(flatten)]
    api: ApiArgs,

    /// Contact name
    #[arg(long)]
    name: String,

    /// Phone number
    #[arg(long)]
    phone: String,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Relationship bucket (friend, family, colleague, customer, …)
    #[arg(long, default_value = "customer")]
    relationship: String,

    /// Free-form notes
    #[arg(long)]
    notes: Option<String>,
}

pub(crate) async fn run(command: ContactsCommand) -> Result<(), String> {
    match command.command {
        ContactsSubcommand::List(args) => list(args).await,
        ContactsSubcommand::Add(args) => add(args).await,
    }
}

async fn list(args: ListContactsArgs) -> Result<(), String> {
    let context = args.api.context();

    let contacts = context
        .contacts
        .list_contacts()
        .await
        .map_err(|error| format!("failed to list contacts: {error}"))?;

    warn_if_fallback(contacts.is_fallback());

    if contacts.data.is_empty() {
        println!("no contacts found");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["name", "phone", "email", "relationship"]);

    for contact in &contacts.data {
        builder.push_record([
            contact.name.clone(),
            contact.phone.clone(),
            contact.email.clone().unwrap_or_else(|| "-".to_owned()),
            contact.relationship.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    println!("{table}");

    Ok(())
}

async fn add(args: AddContactArgs) -> Result<(), String> {
    let context = args.api.context();

    let contact = context
        .contacts
        .add_contact(NewContact {
            name: args.name,
            phone: args.phone,
            email: args.email,
            relationship: args.relationship,
            notes: args.notes,
        })
        .await
        .map_err(|error| format!("failed to add contact: {error}"))?;

    println!("contact_id: {}", contact.id);
    println!("name: {}", contact.name);

    Ok(())
}
