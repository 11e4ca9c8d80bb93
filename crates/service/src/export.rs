//! CSV export of service orders.
//!
//! Headers and values are rendered in Portuguese for the front desk spreadsheet, the
//! file starts with a UTF-8 BOM so spreadsheet tools detect the encoding.

use chrono::{DateTime, TimeZone};
use models::service_order::{PaymentMethod, ServiceOrder, ServiceStatus};

use crate::errors::ServiceError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const HEADERS: [&str; 9] = [
    "ID",
    "Nome do Cliente",
    "Número de Telefone",
    "Modelo do Carro",
    "Tipo de Serviço",
    "Valor do Serviço",
    "Status",
    "Método de Pagamento",
    "Mensagem Enviada",
];

fn payment_label(method: Option<PaymentMethod>) -> &'static str {
    match method {
        Some(PaymentMethod::Card) => "Cartão",
        Some(PaymentMethod::Cash) => "Dinheiro",
        Some(PaymentMethod::Pix) => "PIX",
        None => "",
    }
}

// Only the two statuses the desk uses are translated
fn status_label(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Completed => "Pronto",
        ServiceStatus::Pending => "Pendente",
        other => other.as_str(),
    }
}

fn sent_label(sent: bool) -> &'static str {
    if sent { "Sim" } else { "Não" }
}

/// Render orders as CSV bytes, header row first.
pub fn orders_to_csv(orders: &[ServiceOrder]) -> Result<Vec<u8>, ServiceError> {
    let mut wtr = csv::Writer::from_writer(UTF8_BOM.to_vec());
    wtr.write_record(HEADERS).map_err(|e| ServiceError::Export(e.to_string()))?;
    for o in orders {
        wtr.write_record([
            o.id.to_string().as_str(),
            o.client_name.as_str(),
            o.phone_number.as_str(),
            o.car_model.as_str(),
            o.service_type.as_str(),
            o.service_value.to_string().as_str(),
            status_label(o.status),
            payment_label(o.payment_method),
            sent_label(o.message_was_sent),
        ])
        .map_err(|e| ServiceError::Export(e.to_string()))?;
    }
    wtr.into_inner().map_err(|e| ServiceError::Export(e.to_string()))
}

/// `ordens_servico_<YYYYMMDD_HHMMSS>.csv`
pub fn export_filename<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("ordens_servico_{}.csv", at.format("%Y%m%d_%H%M%S"))
}
