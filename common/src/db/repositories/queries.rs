// SQL fragments for the Galac tables
// Column lists are kept in one place so every SELECT decodes into the same models

/// SQL query fragments for the `Cliente` table
pub mod client_queries {
    pub const FROM_TABLE: &str = r#" FROM dbo."Cliente" WHERE 1=1"#;

    pub const SELECT_CODES: &str = r#"SELECT "Codigo""#;

    pub const ORDER_BY_LAST_MODIFIED: &str = r#" ORDER BY "FechaUltimaModificacion" DESC"#;

    /// Every column decoded into `Client`
    pub const SELECT_ALL_COLUMNS: &str = r#"SELECT
        "ConsecutivoCompania", "Consecutivo", "Codigo", "Nombre", "NumeroRIF",
        "NumeroNit", "Direccion", "Ciudad", "ZonaPostal", "Telefono", "Fax",
        "Status", "Contacto", "ZonaDeCobranza", "CodigoVendedor",
        "RazonInactividad", "Email", "ActivarAvisoAlEscoger", "TextoDelAviso",
        "CuentaContableCxc", "CuentaContableIngresos", "CuentaContableAnticipo",
        "InfoGalac", "SectorDeNegocio", "CodigoLote", "NivelDePrecio", "Origen",
        "DiaCumpleanos", "MesCumpleanos", "CorrespondenciaXenviar", "EsExtranjero",
        "ClienteDesdeFecha", "AQueSeDedicaElCliente", "NombreOperador",
        "FechaUltimaModificacion", "TipoDocumentoIdentificacion",
        "TipoDeContribuyente", "CampoDefinible1", "ConsecutivoVendedor""#;
}

/// SQL query fragments for the `Factura` table
pub mod invoice_queries {
    pub const FROM_TABLE: &str = r#" FROM dbo."Factura" WHERE 1=1"#;

    pub const SELECT_COUNT: &str = "SELECT COUNT(*)";

    pub const ORDER_BY_DATE: &str = r#" ORDER BY "Fecha" DESC"#;

    /// Distinct control numbers, skipping NULL and empty values
    pub const SELECT_CONTROL_NUMBERS: &str = r#"SELECT DISTINCT "NumeroControl""#;

    pub const NON_EMPTY_CONTROL_NUMBER: &str =
        r#" AND "NumeroControl" IS NOT NULL AND "NumeroControl" <> ''"#;

    pub const ORDER_BY_CONTROL_NUMBER: &str = r#" ORDER BY "NumeroControl""#;

    /// Every column decoded into `Invoice`
    ///
    /// `fldTimeStamp` is a rowversion column in Galac and is never selected.
    pub const SELECT_ALL_COLUMNS: &str = r#"SELECT
        "ConsecutivoCompania", "Numero", "Fecha", "CodigoCliente", "CodigoVendedor",
        "Observaciones", "TotalMontoExento", "TotalBaseImponible", "TotalRenglones",
        "TotalIVA", "TotalFactura", "PorcentajeDescuento", "CodigoNota1",
        "CodigoNota2", "Moneda", "NivelDePrecio", "ReservarMercancia",
        "FechaDeRetiro", "CodigoAlmacen", "StatusFactura", "TipoDeDocumento",
        "InsertadaManualmente", "FacturaHistorica", "Cancelada",
        "UsarDireccionFiscal", "NoDirDespachoAimprimir", "CambioABolivares",
        "MontoDelAbono", "FechaDeVencimiento", "CondicionesDePago",
        "FormaDeLaInicial", "PorcentajeDeLaInicial", "NumeroDeCuotas",
        "MontoDeLasCuotas", "MontoUltimaCuota", "Talonario", "FormaDePago",
        "NumDiasDeVencimiento1aCuota", "EditarMontoCuota", "NumeroControl",
        "TipoDeTransaccion", "NumeroFacturaAfectada", "NumeroPlanillaExportacion",
        "TipoDeVenta", "UsaMaquinaFiscal", "CodigoMaquinaRegistradora",
        "NumeroDesde", "NumeroHasta", "NumeroControlHasta", "MontoIvaRetenido",
        "FechaAplicacionRetIVA", "NumeroComprobanteRetIVA",
        "FechaComprobanteRetIVA", "SeRetuvoIVA", "FacturaConPreciosSinIva",
        "VueltoDelCobroDirecto", "ConsecutivoCaja", "GeneraCobroDirecto",
        "FechaDeFacturaAfectada", "FechaDeEntrega", "PorcentajeDescuento1",
        "PorcentajeDescuento2", "MontoDescuento1", "MontoDescuento2", "CodigoLote",
        "Devolucion", "PorcentajeAlicuota1", "PorcentajeAlicuota2",
        "PorcentajeAlicuota3", "MontoIVAAlicuota1", "MontoIVAAlicuota2",
        "MontoIVAAlicuota3", "MontoGravableAlicuota1", "MontoGravableAlicuota2",
        "MontoGravableAlicuota3", "RealizoCierreZ", "NumeroComprobanteFiscal",
        "SerialMaquinaFiscal", "AplicarPromocion", "RealizoCierreX",
        "HoraModificacion", "FormaDeCobro", "OtraFormaDeCobro",
        "NoCotizacionDeOrigen", "NoContrato", "ConsecutivoVehiculo",
        "ConsecutivoAlmacen", "NumeroResumenDiario", "NoControlDespachoDeOrigen",
        "ImprimeFiscal", "EsDiferida", "EsOriginalmenteDiferida",
        "SeContabilizoIvaDiferido", "AplicaDecretoIvaEspecial",
        "EsGeneradaPorPuntoDeVenta", "CambioMonedaCXC",
        "CambioMostrarTotalEnDivisas", "CodigoMonedaDeCobro",
        "GeneradaPorNotaEntrega", "EmitidaEnFacturaNumero", "CodigoMoneda",
        "NombreOperador", "FechaUltimaModificacion", "NumeroParaResumen",
        "NroDiasMantenerCambioAMonedaLocal", "FechaLimiteCambioAMonedaLocal",
        "GeneradoPor", "BaseImponibleIGTF", "IGTFML", "IGTFME", "AlicuotaIGTF",
        "MotivoDeAnulacion", "ProveedorImprentaDigital", "ConsecutivoVendedor",
        "ImprentaDigitalGUID""#;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_count(select: &str) -> usize {
        select.trim_start_matches("SELECT").split(',').count()
    }

    #[test]
    fn test_column_lists_match_models() {
        assert_eq!(column_count(client_queries::SELECT_ALL_COLUMNS), 39);
        assert_eq!(column_count(invoice_queries::SELECT_ALL_COLUMNS), 115);
    }

    #[test]
    fn test_identifiers_are_quoted() {
        assert!(client_queries::SELECT_ALL_COLUMNS.contains(r#""NumeroRIF""#));
        assert!(invoice_queries::SELECT_ALL_COLUMNS.contains(r#""ImprentaDigitalGUID""#));
        assert!(!invoice_queries::SELECT_ALL_COLUMNS.contains("fldTimeStamp"));
    }
}
