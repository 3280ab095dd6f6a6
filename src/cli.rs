use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use common::BookingRequest;

pub mod commands;

use crate::api_client::RentalApi;
use crate::config::ClientConfig;
use commands::{book, list_properties, show_property, show_reviews};

#[derive(Parser)]
#[command(name = "stayease")]
#[command(about = "StayEase client for browsing rentals and booking stays")]
#[command(version)]
pub struct Cli {
    /// Base URL of the rental API
    ///
    /// Overrides `api_base_url` from stayease.toml.
    /// Example: http://localhost:3000/api
    #[arg(long, global = true, env = "STAYEASE_API_BASE_URL")]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all available properties
    Properties,
    /// Show a property together with its guest reviews
    Property {
        /// Property identifier
        id: String,
    },
    /// Show guest reviews for a property
    Reviews {
        /// Property identifier
        id: String,
    },
    /// Book a stay
    ///
    /// Every field is required; the first missing one is reported.
    Book(BookArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BookArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone_number: String,
    #[arg(long, default_value = "")]
    pub card_number: String,
    /// Card expiration date, forwarded as typed (e.g. 12/27)
    #[arg(long, default_value = "")]
    pub expiration_date: String,
    #[arg(long, default_value = "")]
    pub cvv: String,
    #[arg(long, default_value = "")]
    pub billing_address: String,
}

impl From<BookArgs> for BookingRequest {
    fn from(args: BookArgs) -> Self {
        BookingRequest {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone_number: args.phone_number,
            card_number: args.card_number,
            expiration_date: args.expiration_date,
            cvv: args.cvv,
            billing_address: args.billing_address,
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = ClientConfig::load()?.with_api_base_url(self.api_base_url);
        let api = RentalApi::new(&config)?;

        let output = match self.command {
            Commands::Properties => list_properties(&api).await?,
            Commands::Property { id } => show_property(&api, &id).await?,
            Commands::Reviews { id } => show_reviews(&api, &id).await?,
            Commands::Book(args) => book(&api, args.into()).await?,
        };

        println!("{}", output.trim_end());
        Ok(())
    }
}
