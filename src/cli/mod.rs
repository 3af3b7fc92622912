//! CLI command definitions and handlers

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub mod args;
pub mod auth;
pub mod catalogo;
pub mod cliente;
pub mod config;
pub mod context;
pub mod passagem;
pub mod relatorio;
pub mod status;
pub mod viagem;

pub use args::{DateRangeArgs, OutputFormat, SaidaArgs};
pub use context::CommandContext;

use crate::client::models::FormaPagamento;

/// Embuibe CLI - counter companion for the Expresso Embuibe backend
#[derive(Parser, Debug)]
#[command(name = "embuibe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "EMBUIBE_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "EMBUIBE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Page origin the client runs under (e.g. http://localhost:3000/)
    #[arg(long, global = true, env = "EMBUIBE_ORIGIN", hide_env = true)]
    pub origin: Option<String>,

    /// API base URL, used verbatim
    #[arg(long, global = true, env = "EMBUIBE_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "EMBUIBE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Login name (prompted when omitted)
        #[arg(long, short = 'u')]
        user: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Forget the session token
    Logout,

    /// Show the logged-in user
    Me,

    /// Show configuration and session status
    Status,

    /// Check that the backend is reachable
    Health,

    /// Display version information
    Version,

    /// Manage the local configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Manage customers
    #[command(subcommand)]
    Cliente(ClienteCommands),

    /// Cities and their boarding points
    #[command(subcommand)]
    Cidade(CidadeCommands),

    /// Boarding points
    #[command(subcommand)]
    Local(LocalCommands),

    /// Drivers
    #[command(subcommand)]
    Motorista(MotoristaCommands),

    /// Issue and look up tickets
    #[command(subcommand)]
    Passagem(PassagemCommands),

    /// Departures and passenger manifests
    #[command(subcommand)]
    Viagem(ViagemCommands),

    /// Sales reports
    #[command(subcommand)]
    Relatorio(RelatorioCommands),

    /// Dashboard figures
    #[command(subcommand)]
    Dashboard(DashboardCommands),
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set the page origin
    SetOrigin {
        /// Page URL, e.g. http://192.168.0.10:3000/
        url: String,
    },

    /// Set an explicit API base URL
    SetApiUrl {
        /// Base URL, e.g. https://api.example.com/api/v1
        url: String,
    },

    /// Remove the explicit API base URL
    UnsetApiUrl,
}

/// Customer subcommands
#[derive(Subcommand, Debug)]
pub enum ClienteCommands {
    /// Search customers
    List {
        /// Name or phone to search for
        #[arg(long, short = 'q')]
        search: Option<String>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one customer
    Get {
        /// Customer ID
        id: i64,
    },

    /// Register a customer
    Create {
        #[arg(long)]
        nome: String,

        #[arg(long)]
        telefone: String,

        #[arg(long)]
        cidade: String,

        #[arg(long)]
        bairro: Option<String>,

        #[arg(long)]
        endereco: Option<String>,

        #[arg(long)]
        cep: Option<String>,
    },

    /// Change customer fields
    Update {
        /// Customer ID
        id: i64,

        #[arg(long)]
        nome: Option<String>,

        #[arg(long)]
        telefone: Option<String>,

        #[arg(long)]
        cidade: Option<String>,

        #[arg(long)]
        bairro: Option<String>,

        #[arg(long)]
        endereco: Option<String>,

        #[arg(long)]
        cep: Option<String>,

        /// Reactivate or deactivate the customer
        #[arg(long)]
        ativo: Option<bool>,
    },

    /// Deactivate a customer
    Delete {
        /// Customer ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// City subcommands
#[derive(Subcommand, Debug)]
pub enum CidadeCommands {
    /// List cities on the route
    List,

    /// List boarding points of a city
    Locais {
        /// City ID
        cidade_id: i64,
    },
}

/// Boarding point subcommands
#[derive(Subcommand, Debug)]
pub enum LocalCommands {
    /// List all boarding points
    List,
}

/// Driver subcommands
#[derive(Subcommand, Debug)]
pub enum MotoristaCommands {
    /// List drivers
    List,

    /// Show one driver
    Get {
        /// Driver ID
        id: i64,
    },
}

/// Ticket subcommands
#[derive(Subcommand, Debug)]
pub enum PassagemCommands {
    /// Issue a ticket
    Emitir {
        /// Customer ID
        #[arg(long = "cliente")]
        cliente_id: i64,

        /// Boarding point ID
        #[arg(long = "local")]
        local_embarque_id: i64,

        /// Driver ID
        #[arg(long = "motorista")]
        motorista_id: i64,

        /// Travel date (YYYY-MM-DD)
        #[arg(long)]
        data: NaiveDate,

        /// Departure time (HH:MM)
        #[arg(long, value_parser = args::parse_horario)]
        horario: chrono::NaiveTime,

        /// Payment method
        #[arg(long, value_enum)]
        pagamento: FormaPagamento,

        /// Write the ticket PDF to this file
        #[arg(long)]
        pdf: Option<String>,
    },

    /// Show one ticket
    Get {
        /// Ticket ID
        id: i64,
    },

    /// Download a ticket PDF
    Pdf {
        /// Ticket ID
        id: i64,

        /// Output file (defaults to passagem-<id>.pdf)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },

    /// List tickets for a travel date
    Dia {
        /// Travel date (YYYY-MM-DD)
        data: NaiveDate,
    },
}

/// Trip subcommands
#[derive(Subcommand, Debug)]
pub enum ViagemCommands {
    /// Preview the manifest of a departure before registering it
    BuscarManifesto(SaidaArgs),

    /// Register a departure
    RegistrarSaida(SaidaArgs),

    /// Confirm a departure
    ConfirmarSaida(SaidaArgs),

    /// List registered trips
    List {
        /// First day (YYYY-MM-DD)
        #[arg(long = "inicio")]
        data_inicio: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long = "fim")]
        data_fim: Option<NaiveDate>,

        /// Driver ID
        #[arg(long = "motorista")]
        motorista_id: Option<i64>,
    },

    /// Show the manifest of a registered trip
    Manifesto {
        /// Trip ID
        viagem_id: i64,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum RelatorioCommands {
    /// Daily sales report
    Diario {
        /// Day (YYYY-MM-DD, defaults to today on the server)
        #[arg(long)]
        data: Option<NaiveDate>,
    },

    /// Sales over a date range
    Periodo(DateRangeArgs),

    /// Sales of one driver over a date range
    Motorista {
        /// Driver ID
        motorista_id: i64,

        #[command(flatten)]
        range: DateRangeArgs,
    },
}

/// Dashboard subcommands
#[derive(Subcommand, Debug)]
pub enum DashboardCommands {
    /// Summary for a day
    Resumo {
        /// Day (YYYY-MM-DD, defaults to today on the server)
        #[arg(long)]
        data: Option<NaiveDate>,
    },

    /// Quick counters
    Metricas,
}
