//! Reader stages
//!
//! Each builder emits a `readers.*` descriptor. A bare path appended to a
//! pipeline also acts as an implicit reader; explicit builders are needed
//! whenever reader options must be set.

define_stage!(
    /// Read NGA BPF point files (versions 1-3, Zlib compression only).
    BpfReader, "readers.bpf", bpf {
        filename,
        fix_dims,
    }
);

define_stage!(
    /// Create a buffer of points from an in-memory view.
    BufferReader, "readers.buffer", buffer {}
);

define_stage!(
    /// Read Cloud Optimized Point Cloud files, optionally windowed by
    /// bounds or polygon.
    CopcReader, "readers.copc", copc {
        bounds,
        polygon,
        ogr,
        requests,
        resolution,
        header,
        query,
        las,
        fix_dims,
    }
);

define_stage!(
    /// Read Google Draco compressed geometry.
    DracoReader, "readers.draco", draco {
        filename,
    }
);

define_stage!(
    /// Read ASTM E57 scans.
    E57Reader, "readers.e57", e57 {}
);

define_stage!(
    /// Read Entwine Point Tile datasets, remote or local.
    ///
    /// `bounds`, `polygon` and `resolution` prune the octree query before
    /// any point is fetched.
    EptReader, "readers.ept", ept {
        filename,
        spatialreference,
        bounds,
        resolution,
        addons,
        origin,
        polygon,
        ogr,
        requests,
        header,
        query,
    }
);

define_stage!(
    /// Synthesize points without reading anything; mostly for pipeline
    /// testing.
    FauxReader, "readers.faux", faux {
        bounds,
        count,
        override_srs,
        mode,
    }
);

define_stage!(
    /// Read raster bands as point dimensions via GDAL.
    GdalReader, "readers.gdal", gdal {
        filename,
        header,
    }
);

define_stage!(
    /// Read HDF5 datasets mapped to dimensions.
    HdfReader, "readers.hdf", hdf {
        dimensions,
    }
);

define_stage!(
    /// Read Esri I3S web scene services.
    I3sReader, "readers.i3s", i3s {
        filename,
        threads,
        obb,
        dimensions,
    }
);

define_stage!(
    /// Read NASA ILVIS2 altimetry text files.
    Ilvis2Reader, "readers.ilvis2", ilvis2 {
        filename,
        mapping,
        metadata,
    }
);

define_stage!(
    /// Read ASPRS LAS (and LAZ) files.
    LasReader, "readers.las", las {
        compression,
        ignore_vlr,
        fix_dims,
        nosrs,
    }
);

define_stage!(
    /// Read MATLAB .mat files containing a point array struct.
    MatlabReader, "readers.matlab", matlab {
        filename,
        struct_ => "struct",
    }
);

define_stage!(
    /// Read swath bathymetry via the MB-System library.
    MbioReader, "readers.mbio", mbio {
        filename,
        format,
        datatype,
        timegap,
        speedmin,
    }
);

define_stage!(
    /// Read points from a raw memory buffer handed in by the embedding
    /// application.
    MemoryviewReader, "readers.memoryview", memoryview {}
);

define_stage!(
    /// Read LizardTech MrSID/MG4 files.
    MrsidReader, "readers.mrsid", mrsid {
        filename,
    }
);

define_stage!(
    /// Read point data embedded in NITF containers.
    NitfReader, "readers.nitf", nitf {
        filename,
        extra_dims,
        use_eb_vlr,
        compression,
    }
);

define_stage!(
    /// Read NumPy .npy arrays, either as a dimension grid or via a
    /// user-supplied function.
    NumpyReader, "readers.numpy", numpy {
        filename,
        dimension,
        order,
        module,
        function,
        fargs,
    }
);

define_stage!(
    /// Read Wavefront OBJ vertices and faces.
    ObjReader, "readers.obj", obj {
        filename,
    }
);

define_stage!(
    /// Read Optech Corrected Sensor Data files.
    OptechReader, "readers.optech", optech {
        filename,
    }
);

define_stage!(
    /// Read Point Cloud Library PCD files.
    PcdReader, "readers.pcd", pcd {
        filename,
    }
);

define_stage!(
    /// Read patches from a PostgreSQL pointcloud-extension table.
    PgpointcloudReader, "readers.pgpointcloud", pgpointcloud {
        connection,
        table,
        schema,
        column,
    }
);

define_stage!(
    /// Read polygon file format (PLY) vertices.
    PlyReader, "readers.ply", ply {
        filename,
    }
);

define_stage!(
    /// Read Leica PTS text files.
    PtsReader, "readers.pts", pts {
        filename,
    }
);

define_stage!(
    /// Read ATM QFIT waveform files.
    QfitReader, "readers.qfit", qfit {
        filename,
        flip_coordinates,
        scale_z,
        little_endian,
    }
);

define_stage!(
    /// Read RIEGL RDB 5.x databases.
    RdbReader, "readers.rdb", rdb {
        filename,
        filter,
        extras,
    }
);

define_stage!(
    /// Read RIEGL RXP streams straight from the scanner format.
    RxpReader, "readers.rxp", rxp {
        filename,
        rdtp,
        sync_to_pps,
        reflectance_as_intensity,
        min_reflectance,
        max_reflectance,
    }
);

define_stage!(
    /// Read Applanix SBET trajectory files.
    SbetReader, "readers.sbet", sbet {
        filename,
        angles_as_degrees,
    }
);

define_stage!(
    /// Read Esri Scene Layer Package archives.
    SlpkReader, "readers.slpk", slpk {
        filename,
        obb,
        dimensions,
    }
);

define_stage!(
    /// Read Applanix smrmsg accuracy files accompanying an SBET.
    SmrmsgReader, "readers.smrmsg", smrmsg {
        filename,
    }
);

define_stage!(
    /// Read Terrasolid BIN files.
    TerrasolidReader, "readers.terrasolid", terrasolid {
        filename,
    }
);

define_stage!(
    /// Read delimited text files, one point per line.
    TextReader, "readers.text", text {}
);

define_stage!(
    /// Read a TileDB array, optionally sliced by a 3D bounding box or a
    /// timestamp range.
    TiledbReader, "readers.tiledb", tiledb {
        array_name,
        config_file,
        chunk_size,
        stats,
        bbox3d,
        timestamp,
        end_timestamp,
        start_timestamp,
        strict,
    }
);

define_stage!(
    /// Read points selected through an OGR tile-index layer.
    TindexReader, "readers.tindex", tindex {
        filename,
        srs_column,
        tindex_name,
        sql,
        t_srs,
        filter_srs,
        where_ => "where",
        dialect,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_carries_fixed_type() {
        assert_eq!(LasReader::STAGE_TYPE, "readers.las");
        assert_eq!(las().build().stage_type(), Some("readers.las"));
        assert_eq!(
            las().compression(true).nosrs(false).build().stage_type(),
            Some("readers.las")
        );
    }

    #[test]
    fn unset_options_stay_out() {
        let stage = copc().bounds("([0,1],[0,1])").build();
        assert!(stage.contains("bounds"));
        assert!(!stage.contains("resolution"));
        assert!(!stage.contains("polygon"));
    }

    #[test]
    fn keyword_named_options_emit_engine_keys() {
        let stage = tindex()
            .filename("index.sqlite")
            .where_("location LIKE '%las'")
            .build();
        assert_eq!(stage.get("where"), Some(&json!("location LIKE '%las'")));

        let stage = matlab().struct_("pdal").build();
        assert_eq!(stage.get("struct"), Some(&json!("pdal")));
    }

    #[test]
    fn extra_option_overrides_recognized_setter() {
        let stage = faux()
            .count(100)
            .mode("ramp")
            .option("count", 5)
            .build();
        assert_eq!(stage.get("count"), Some(&json!(5)));
        assert_eq!(stage.get("mode"), Some(&json!("ramp")));
    }

    #[test]
    fn inputs_and_tag_are_plain_options() {
        let stage = e57().tag("scan").inputs(json!(["previous"])).build();
        assert_eq!(stage.get("tag"), Some(&json!("scan")));
        assert_eq!(stage.get("inputs"), Some(&json!(["previous"])));
    }
}
