//! Embuibe CLI - counter companion for the Expresso Embuibe backend

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod storage;

use cli::args::GlobalOptions;
use cli::{
    CidadeCommands, Cli, ClienteCommands, Commands, ConfigCommands, DashboardCommands,
    LocalCommands, MotoristaCommands, PassagemCommands, RelatorioCommands, ViagemCommands,
};
use client::models::{ClienteInput, ClienteQuery, ClienteUpdate, NovaPassagem, ViagemQuery};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "embuibe=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    log::debug!("Debug mode enabled");

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { user, password } => cli::auth::login(&opts, user, password).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Me => cli::auth::me(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Health => cli::status::health(&opts).await,
        Commands::Version => {
            println!("embuibe version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::SetOrigin { url } => cli::config::set_origin(&opts, &url),
            ConfigCommands::SetApiUrl { url } => cli::config::set_api_url(&opts, &url),
            ConfigCommands::UnsetApiUrl => cli::config::unset_api_url(&opts),
        },
        Commands::Cliente(cliente_cmd) => match cliente_cmd {
            ClienteCommands::List {
                search,
                page,
                limit,
            } => {
                let query = ClienteQuery {
                    q: search,
                    page,
                    limit,
                };
                cli::cliente::list(&opts, query).await
            }
            ClienteCommands::Get { id } => cli::cliente::get(&opts, id).await,
            ClienteCommands::Create {
                nome,
                telefone,
                cidade,
                bairro,
                endereco,
                cep,
            } => {
                let input = ClienteInput {
                    nome,
                    telefone,
                    cidade,
                    bairro,
                    endereco,
                    cep,
                };
                cli::cliente::create(&opts, input).await
            }
            ClienteCommands::Update {
                id,
                nome,
                telefone,
                cidade,
                bairro,
                endereco,
                cep,
                ativo,
            } => {
                let changes = ClienteUpdate {
                    nome,
                    telefone,
                    endereco,
                    bairro,
                    cidade,
                    cep,
                    ativo,
                };
                cli::cliente::update(&opts, id, changes).await
            }
            ClienteCommands::Delete { id, yes } => cli::cliente::delete(&opts, id, yes).await,
        },
        Commands::Cidade(cidade_cmd) => match cidade_cmd {
            CidadeCommands::List => cli::catalogo::cidades(&opts).await,
            CidadeCommands::Locais { cidade_id } => {
                cli::catalogo::locais_by_cidade(&opts, cidade_id).await
            }
        },
        Commands::Local(LocalCommands::List) => cli::catalogo::locais(&opts).await,
        Commands::Motorista(motorista_cmd) => match motorista_cmd {
            MotoristaCommands::List => cli::catalogo::motoristas(&opts).await,
            MotoristaCommands::Get { id } => cli::catalogo::motorista(&opts, id).await,
        },
        Commands::Passagem(passagem_cmd) => match passagem_cmd {
            PassagemCommands::Emitir {
                cliente_id,
                local_embarque_id,
                motorista_id,
                data,
                horario,
                pagamento,
                pdf,
            } => {
                let passagem = NovaPassagem {
                    cliente_id,
                    local_embarque_id,
                    motorista_id,
                    horario,
                    data_viagem: data,
                    forma_pagamento: pagamento,
                };
                cli::passagem::emitir(&opts, passagem, pdf).await
            }
            PassagemCommands::Get { id } => cli::passagem::get(&opts, id).await,
            PassagemCommands::Pdf { id, output } => cli::passagem::pdf(&opts, id, output).await,
            PassagemCommands::Dia { data } => cli::passagem::dia(&opts, data).await,
        },
        Commands::Viagem(viagem_cmd) => match viagem_cmd {
            ViagemCommands::BuscarManifesto(saida) => {
                cli::viagem::buscar_manifesto(&opts, &saida).await
            }
            ViagemCommands::RegistrarSaida(saida) => {
                cli::viagem::registrar_saida(&opts, &saida).await
            }
            ViagemCommands::ConfirmarSaida(saida) => {
                cli::viagem::confirmar_saida(&opts, &saida).await
            }
            ViagemCommands::List {
                data_inicio,
                data_fim,
                motorista_id,
            } => {
                let query = ViagemQuery {
                    data_inicio,
                    data_fim,
                    motorista_id,
                };
                cli::viagem::list(&opts, query).await
            }
            ViagemCommands::Manifesto { viagem_id } => {
                cli::viagem::manifesto(&opts, viagem_id).await
            }
        },
        Commands::Relatorio(relatorio_cmd) => match relatorio_cmd {
            RelatorioCommands::Diario { data } => cli::relatorio::diario(&opts, data).await,
            RelatorioCommands::Periodo(range) => cli::relatorio::periodo(&opts, &range).await,
            RelatorioCommands::Motorista {
                motorista_id,
                range,
            } => cli::relatorio::motorista(&opts, motorista_id, &range).await,
        },
        Commands::Dashboard(dashboard_cmd) => match dashboard_cmd {
            DashboardCommands::Resumo { data } => cli::relatorio::resumo(&opts, data).await,
            DashboardCommands::Metricas => cli::relatorio::metricas(&opts).await,
        },
    }
}
