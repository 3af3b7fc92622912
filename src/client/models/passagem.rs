//! Ticket models

use chrono::{NaiveDate, NaiveTime};
use clap::ValueEnum;
use serde::Serialize;

/// Payment method accepted at the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormaPagamento {
    Dinheiro,
    Cartao,
    Pix,
}

/// Body of `POST /passagens`
#[derive(Debug, Clone, Serialize)]
pub struct NovaPassagem {
    pub cliente_id: i64,
    pub local_embarque_id: i64,
    pub motorista_id: i64,
    pub horario: NaiveTime,
    pub data_viagem: NaiveDate,
    pub forma_pagamento: FormaPagamento,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nova_passagem_wire_format() {
        let passagem = NovaPassagem {
            cliente_id: 3,
            local_embarque_id: 8,
            motorista_id: 2,
            horario: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            data_viagem: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            forma_pagamento: FormaPagamento::Pix,
        };

        assert_eq!(
            serde_json::to_value(&passagem).unwrap(),
            json!({
                "cliente_id": 3,
                "local_embarque_id": 8,
                "motorista_id": 2,
                "horario": "06:30:00",
                "data_viagem": "2025-03-14",
                "forma_pagamento": "PIX"
            })
        );
    }

    #[test]
    fn test_forma_pagamento_names() {
        assert_eq!(serde_json::to_value(FormaPagamento::Dinheiro).unwrap(), "DINHEIRO");
        assert_eq!(serde_json::to_value(FormaPagamento::Cartao).unwrap(), "CARTAO");
    }
}
