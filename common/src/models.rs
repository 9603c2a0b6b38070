use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Client Models
// ============================================================================

/// A row of the Galac `Cliente` table.
///
/// Keyed by (`ConsecutivoCompania`, `Codigo`). `NumeroRIF` is not unique, so a
/// RIF search may return several clients. JSON keys keep the Galac column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Client {
    pub consecutivo_compania: i32,
    pub consecutivo: i32,
    pub codigo: String,
    pub nombre: String,
    #[serde(rename = "NumeroRIF")]
    #[sqlx(rename = "NumeroRIF")]
    pub numero_rif: Option<String>,
    pub numero_nit: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub zona_postal: Option<String>,
    pub telefono: Option<String>,
    pub fax: Option<String>,
    pub status: Option<String>,
    pub contacto: Option<String>,
    pub zona_de_cobranza: Option<String>,
    pub codigo_vendedor: Option<String>,
    pub razon_inactividad: Option<String>,
    pub email: Option<String>,
    pub activar_aviso_al_escoger: String,
    pub texto_del_aviso: Option<String>,
    pub cuenta_contable_cxc: Option<String>,
    pub cuenta_contable_ingresos: Option<String>,
    pub cuenta_contable_anticipo: Option<String>,
    pub info_galac: Option<String>,
    pub sector_de_negocio: Option<String>,
    pub codigo_lote: Option<String>,
    pub nivel_de_precio: Option<String>,
    pub origen: Option<String>,
    pub dia_cumpleanos: Option<i32>,
    pub mes_cumpleanos: Option<i32>,
    pub correspondencia_xenviar: String,
    pub es_extranjero: String,
    pub cliente_desde_fecha: Option<NaiveDateTime>,
    pub a_que_se_dedica_el_cliente: Option<String>,
    pub nombre_operador: Option<String>,
    pub fecha_ultima_modificacion: Option<NaiveDateTime>,
    pub tipo_documento_identificacion: Option<String>,
    pub tipo_de_contribuyente: Option<String>,
    #[serde(rename = "CampoDefinible1")]
    #[sqlx(rename = "CampoDefinible1")]
    pub campo_definible1: Option<String>,
    pub consecutivo_vendedor: i32,
}

// ============================================================================
// Invoice Models
// ============================================================================

/// A row of the Galac `Factura` table, keyed by (`ConsecutivoCompania`,
/// `Numero`, `TipoDeDocumento`).
///
/// `Observaciones` usually carries the subscription month tag
/// (`ABRIL-Suscripcion:`) and the Odoo subscription code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Invoice {
    pub consecutivo_compania: i32,
    pub numero: String,
    pub fecha: NaiveDateTime,
    pub codigo_cliente: Option<String>,
    pub codigo_vendedor: Option<String>,
    pub observaciones: Option<String>,
    pub total_monto_exento: Option<f64>,
    pub total_base_imponible: Option<f64>,
    pub total_renglones: Option<f64>,
    #[serde(rename = "TotalIVA")]
    #[sqlx(rename = "TotalIVA")]
    pub total_iva: Option<f64>,
    pub total_factura: Option<f64>,
    pub porcentaje_descuento: Option<f64>,
    #[serde(rename = "CodigoNota1")]
    #[sqlx(rename = "CodigoNota1")]
    pub codigo_nota1: Option<String>,
    #[serde(rename = "CodigoNota2")]
    #[sqlx(rename = "CodigoNota2")]
    pub codigo_nota2: Option<String>,
    pub moneda: Option<String>,
    pub nivel_de_precio: Option<String>,
    pub reservar_mercancia: String,
    pub fecha_de_retiro: Option<NaiveDateTime>,
    pub codigo_almacen: Option<String>,
    pub status_factura: Option<String>,
    pub tipo_de_documento: String,
    pub insertada_manualmente: String,
    pub factura_historica: String,
    pub cancelada: String,
    pub usar_direccion_fiscal: String,
    pub no_dir_despacho_aimprimir: Option<i32>,
    pub cambio_a_bolivares: Option<f64>,
    pub monto_del_abono: Option<f64>,
    pub fecha_de_vencimiento: Option<NaiveDateTime>,
    pub condiciones_de_pago: Option<String>,
    pub forma_de_la_inicial: Option<String>,
    pub porcentaje_de_la_inicial: Option<f64>,
    pub numero_de_cuotas: Option<i32>,
    pub monto_de_las_cuotas: Option<f64>,
    pub monto_ultima_cuota: Option<f64>,
    pub talonario: Option<String>,
    pub forma_de_pago: Option<String>,
    #[serde(rename = "NumDiasDeVencimiento1aCuota")]
    #[sqlx(rename = "NumDiasDeVencimiento1aCuota")]
    pub num_dias_de_vencimiento1a_cuota: Option<i32>,
    pub editar_monto_cuota: Option<String>,
    pub numero_control: Option<String>,
    pub tipo_de_transaccion: Option<String>,
    pub numero_factura_afectada: Option<String>,
    pub numero_planilla_exportacion: Option<String>,
    pub tipo_de_venta: Option<String>,
    pub usa_maquina_fiscal: Option<String>,
    pub codigo_maquina_registradora: Option<String>,
    pub numero_desde: Option<String>,
    pub numero_hasta: Option<String>,
    pub numero_control_hasta: Option<String>,
    pub monto_iva_retenido: Option<f64>,
    #[serde(rename = "FechaAplicacionRetIVA")]
    #[sqlx(rename = "FechaAplicacionRetIVA")]
    pub fecha_aplicacion_ret_iva: Option<NaiveDateTime>,
    #[serde(rename = "NumeroComprobanteRetIVA")]
    #[sqlx(rename = "NumeroComprobanteRetIVA")]
    pub numero_comprobante_ret_iva: Option<i32>,
    #[serde(rename = "FechaComprobanteRetIVA")]
    #[sqlx(rename = "FechaComprobanteRetIVA")]
    pub fecha_comprobante_ret_iva: Option<NaiveDateTime>,
    #[serde(rename = "SeRetuvoIVA")]
    #[sqlx(rename = "SeRetuvoIVA")]
    pub se_retuvo_iva: Option<String>,
    pub factura_con_precios_sin_iva: String,
    pub vuelto_del_cobro_directo: Option<f64>,
    pub consecutivo_caja: Option<i32>,
    pub genera_cobro_directo: String,
    pub fecha_de_factura_afectada: NaiveDateTime,
    pub fecha_de_entrega: Option<NaiveDateTime>,
    #[serde(rename = "PorcentajeDescuento1")]
    #[sqlx(rename = "PorcentajeDescuento1")]
    pub porcentaje_descuento1: Option<f64>,
    #[serde(rename = "PorcentajeDescuento2")]
    #[sqlx(rename = "PorcentajeDescuento2")]
    pub porcentaje_descuento2: Option<f64>,
    #[serde(rename = "MontoDescuento1")]
    #[sqlx(rename = "MontoDescuento1")]
    pub monto_descuento1: Option<f64>,
    #[serde(rename = "MontoDescuento2")]
    #[sqlx(rename = "MontoDescuento2")]
    pub monto_descuento2: Option<f64>,
    pub codigo_lote: Option<String>,
    pub devolucion: String,
    #[serde(rename = "PorcentajeAlicuota1")]
    #[sqlx(rename = "PorcentajeAlicuota1")]
    pub porcentaje_alicuota1: Option<f64>,
    #[serde(rename = "PorcentajeAlicuota2")]
    #[sqlx(rename = "PorcentajeAlicuota2")]
    pub porcentaje_alicuota2: Option<f64>,
    #[serde(rename = "PorcentajeAlicuota3")]
    #[sqlx(rename = "PorcentajeAlicuota3")]
    pub porcentaje_alicuota3: Option<f64>,
    #[serde(rename = "MontoIVAAlicuota1")]
    #[sqlx(rename = "MontoIVAAlicuota1")]
    pub monto_iva_alicuota1: Option<f64>,
    #[serde(rename = "MontoIVAAlicuota2")]
    #[sqlx(rename = "MontoIVAAlicuota2")]
    pub monto_iva_alicuota2: Option<f64>,
    #[serde(rename = "MontoIVAAlicuota3")]
    #[sqlx(rename = "MontoIVAAlicuota3")]
    pub monto_iva_alicuota3: Option<f64>,
    #[serde(rename = "MontoGravableAlicuota1")]
    #[sqlx(rename = "MontoGravableAlicuota1")]
    pub monto_gravable_alicuota1: Option<f64>,
    #[serde(rename = "MontoGravableAlicuota2")]
    #[sqlx(rename = "MontoGravableAlicuota2")]
    pub monto_gravable_alicuota2: Option<f64>,
    #[serde(rename = "MontoGravableAlicuota3")]
    #[sqlx(rename = "MontoGravableAlicuota3")]
    pub monto_gravable_alicuota3: Option<f64>,
    pub realizo_cierre_z: String,
    pub numero_comprobante_fiscal: Option<String>,
    pub serial_maquina_fiscal: Option<String>,
    pub aplicar_promocion: String,
    pub realizo_cierre_x: String,
    pub hora_modificacion: Option<String>,
    pub forma_de_cobro: String,
    pub otra_forma_de_cobro: Option<String>,
    pub no_cotizacion_de_origen: Option<String>,
    pub no_contrato: Option<String>,
    pub consecutivo_vehiculo: Option<i32>,
    pub consecutivo_almacen: i32,
    pub numero_resumen_diario: Option<String>,
    pub no_control_despacho_de_origen: Option<String>,
    pub imprime_fiscal: String,
    pub es_diferida: String,
    pub es_originalmente_diferida: String,
    pub se_contabilizo_iva_diferido: String,
    pub aplica_decreto_iva_especial: String,
    pub es_generada_por_punto_de_venta: String,
    #[serde(rename = "CambioMonedaCXC")]
    #[sqlx(rename = "CambioMonedaCXC")]
    pub cambio_moneda_cxc: f64,
    pub cambio_mostrar_total_en_divisas: f64,
    pub codigo_moneda_de_cobro: Option<String>,
    pub generada_por_nota_entrega: Option<String>,
    pub emitida_en_factura_numero: Option<String>,
    pub codigo_moneda: String,
    pub nombre_operador: Option<String>,
    pub fecha_ultima_modificacion: Option<NaiveDateTime>,
    pub numero_para_resumen: Option<i32>,
    pub nro_dias_mantener_cambio_a_moneda_local: Option<i32>,
    pub fecha_limite_cambio_a_moneda_local: Option<NaiveDateTime>,
    pub generado_por: Option<String>,
    #[serde(rename = "BaseImponibleIGTF")]
    #[sqlx(rename = "BaseImponibleIGTF")]
    pub base_imponible_igtf: Option<f64>,
    #[serde(rename = "IGTFML")]
    #[sqlx(rename = "IGTFML")]
    pub igtfml: Option<f64>,
    #[serde(rename = "IGTFME")]
    #[sqlx(rename = "IGTFME")]
    pub igtfme: Option<f64>,
    #[serde(rename = "AlicuotaIGTF")]
    #[sqlx(rename = "AlicuotaIGTF")]
    pub alicuota_igtf: Option<f64>,
    pub motivo_de_anulacion: Option<String>,
    pub proveedor_imprenta_digital: String,
    pub consecutivo_vendedor: i32,
    #[serde(rename = "ImprentaDigitalGUID")]
    #[sqlx(rename = "ImprentaDigitalGUID")]
    pub imprenta_digital_guid: Option<String>,
}
