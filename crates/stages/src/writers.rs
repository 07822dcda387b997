//! Writer stages
//!
//! Each builder emits a `writers.*` descriptor. As with readers, a bare
//! trailing path string in the pipeline acts as an implicit writer.

define_stage!(
    /// Write NGA BPF point files.
    BpfWriter, "writers.bpf", bpf {
        filename,
        compression,
        format,
        bundledfile,
        header_data,
        coord_id,
        output_dims,
    }
);

define_stage!(
    /// Write Cloud Optimized Point Cloud files.
    CopcWriter, "writers.copc", copc {
        filename,
        software_id,
        creation_doy,
        creation_year,
        system_id,
        global_encoding,
        project_id,
        filesource_id,
        pipeline,
        vlrs,
    }
);

define_stage!(
    /// Write Google Draco compressed geometry.
    ///
    /// `quantization` maps dimension names to quantization bit depths.
    DracoWriter, "writers.draco", draco {
        filename,
        dimensions,
        quantization,
    }
);

define_stage!(
    /// Write ASTM E57 scans.
    E57Writer, "writers.e57", e57 {
        double_precision => "doublePrecision",
    }
);

define_stage!(
    /// Write new dimensions of an existing Entwine Point Tile dataset as
    /// an add-on overlay.
    EptAddonWriter, "writers.ept_addon", ept_addon {
        addons,
        threads,
    }
);

define_stage!(
    /// Write Autodesk FBX meshes.
    FbxWriter, "writers.fbx", fbx {
        filename,
        ascii,
    }
);

define_stage!(
    /// Interpolate points onto a GDAL raster.
    ///
    /// `output_type` selects the statistic per cell (min, max, mean, idw,
    /// count, stdev or all); `resolution` is required by the engine.
    GdalWriter, "writers.gdal", gdal {
        filename,
        resolution,
        radius,
        power,
        gdaldriver,
        gdalopts,
        data_type,
        nodata,
        output_type,
        window_size,
        dimension,
        bounds,
        origin_x,
        origin_y,
        width,
        height,
        override_srs,
        default_srs,
    }
);

define_stage!(
    /// Write glTF 2.0 binary (GLB) meshes.
    GltfWriter, "writers.gltf", gltf {
        filename,
        metallic,
        roughness,
        red,
        green,
        blue,
        alpha,
        double_sided,
        colors,
        normals,
    }
);

define_stage!(
    /// Write ASPRS LAS (and LAZ) files.
    ///
    /// Header fields (`system_id`, `creation_doy`, ...) default to values
    /// the engine synthesizes; set them only to pin the output header.
    LasWriter, "writers.las", las {
        filename,
        minor_version,
        software_id,
        creation_doy,
        creation_year,
        dataformat_id,
        system_id,
        a_srs,
        global_encoding,
        project_id,
        compression,
        filesource_id,
        discard_high_return_numbers,
        extra_dims,
        pdal_metadata,
        vlrs,
    }
);

define_stage!(
    /// Write MATLAB .mat array structs.
    MatlabWriter, "writers.matlab", matlab {
        filename,
        output_dims,
        struct_ => "struct",
    }
);

define_stage!(
    /// Write point data into a NITF container.
    NitfWriter, "writers.nitf", nitf {
        filename,
        clevel,
        stype,
        ostaid,
        ftitle,
        fsclas,
        oname,
        ophone,
        fsctlh,
        fsclsy,
        idatim,
        iid2,
        fscltx,
        aimidb,
        acftb,
    }
);

define_stage!(
    /// Discard all points; useful to terminate side-effect pipelines.
    NullWriter, "writers.null", null {}
);

define_stage!(
    /// Write point geometries through any OGR vector driver.
    OgrWriter, "writers.ogr", ogr {
        multicount,
        measure_dim,
        ogrdriver,
    }
);

define_stage!(
    /// Write Point Cloud Library PCD files.
    PcdWriter, "writers.pcd", pcd {
        filename,
        compression,
        keep_unspecified,
    }
);

define_stage!(
    /// Write patches into a PostgreSQL pointcloud-extension table.
    PgpointcloudWriter, "writers.pgpointcloud", pgpointcloud {
        connection,
        table,
        schema,
        column,
        compression,
        overwrite,
        srid,
        pcid,
        pre_sql,
        post_sql,
        output_dims,
    }
);

define_stage!(
    /// Write polygon file format (PLY) files, faces included when a mesh
    /// is present.
    PlyWriter, "writers.ply", ply {
        filename,
        storage_mode,
        dims,
        faces,
        sized_types,
        precision,
    }
);

define_stage!(
    /// Write rasters previously produced by a rasterizing stage.
    RasterWriter, "writers.raster", raster {
        filename,
        gdaldriver,
        gdalopts,
        rasters,
        data_type,
        nodata,
    }
);

define_stage!(
    /// Write Applanix SBET trajectory files.
    SbetWriter, "writers.sbet", sbet {
        filename,
        angles_are_degrees,
    }
);

define_stage!(
    /// Write delimited text or GeoJSON, one point per record.
    TextWriter, "writers.text", text {
        filename,
        format,
        keep_unspecified,
        jscallback,
        quote_header,
        write_header,
        newline,
        delimiter,
    }
);

define_stage!(
    /// Write points into a TileDB sparse array.
    TiledbWriter, "writers.tiledb", tiledb {
        array_name,
        config_file,
        data_tile_capacity,
        x_tile_size,
        y_tile_size,
        z_tile_size,
        time_tile_size,
        x_domain_st,
        x_domain_end,
        y_domain_st,
        y_domain_end,
        z_domain_st,
        z_domain_end,
        time_domain_st,
        time_domain_end,
        use_time_dim,
        time_first,
        chunk_size,
        compression,
        compression_level,
        append,
        stats,
        filters,
        timestamp,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_carries_fixed_type() {
        assert_eq!(LasWriter::STAGE_TYPE, "writers.las");
        assert_eq!(
            las().filename("out.las").build().stage_type(),
            Some("writers.las")
        );
        assert_eq!(null().build().stage_type(), Some("writers.null"));
    }

    #[test]
    fn e57_double_precision_emits_camel_case_key() {
        let stage = e57().double_precision(true).build();
        assert_eq!(stage.get("doublePrecision"), Some(&json!(true)));
        assert!(!stage.contains("double_precision"));
    }

    #[test]
    fn empty_string_option_is_kept() {
        let stage = text().delimiter("").write_header(false).build();
        assert_eq!(stage.get("delimiter"), Some(&json!("")));
        assert_eq!(stage.get("write_header"), Some(&json!(false)));
    }

    #[test]
    fn extras_override_recognized_on_collision() {
        let stage = gdal()
            .resolution(1.0)
            .output_type("idw")
            .option("resolution", 2.0)
            .build();
        assert_eq!(stage.get("resolution"), Some(&json!(2.0)));
    }

    #[test]
    fn builder_converts_into_pipeline_element() {
        let element: contracts::PipelineElement = las().filename("out.las").into();
        let stage = element.as_stage().expect("stage variant");
        assert_eq!(stage.stage_type(), Some("writers.las"));
    }
}
