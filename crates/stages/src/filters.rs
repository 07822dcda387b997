//! Filter stages
//!
//! Each builder emits a `filters.*` descriptor. Filters sit between readers
//! and writers; unless `inputs` tags say otherwise the engine wires each
//! stage to the previous element of the pipeline array.

define_stage!(
    /// Flag points whose neighborhood is approximately coplanar.
    ApproximateCoplanarFilter, "filters.approximatecoplanar", approximatecoplanar {
        knn,
        thresh1,
        thresh2,
    }
);

define_stage!(
    /// Assign dimension values from an expression, optionally gated by a
    /// condition.
    ///
    /// `assignment` takes the `Dimension[start:end]=value` range syntax.
    AssignFilter, "filters.assign", assign {
        assignment,
        condition,
        value,
    }
);

define_stage!(
    /// Rearrange points into spatially contiguous chips.
    ChipperFilter, "filters.chipper", chipper {}
);

define_stage!(
    /// Label connected clusters using euclidean distance.
    ClusterFilter, "filters.cluster", cluster {
        min_points,
        max_points,
        tolerance,
        is3d,
    }
);

define_stage!(
    /// Ramp RGB colors from the values of a dimension.
    ColorInterpFilter, "filters.colorinterp", colorinterp {}
);

define_stage!(
    /// Populate dimensions from raster bands at each point location.
    ColorizationFilter, "filters.colorization", colorization {
        raster,
        dimensions,
    }
);

define_stage!(
    /// Compute covariance-based local geometry features.
    ///
    /// `feature_set` selects between the dimensionality presets and
    /// individual features.
    CovarianceFeaturesFilter, "filters.covariancefeatures", covariancefeatures {
        knn,
        threads,
        feature_set,
        stride,
        min_k,
        radius,
        mode,
        optimized,
    }
);

define_stage!(
    /// Coherent Point Drift registration against a fixed point view.
    CpdFilter, "filters.cpd", cpd {}
);

define_stage!(
    /// Keep or drop points inside bounds or a polygon.
    CropFilter, "filters.crop", crop {
        bounds,
        polygon,
        outside,
    }
);

define_stage!(
    /// Cloth Simulation Filter ground classification.
    CsfFilter, "filters.csf", csf {
        resolution,
        ignore,
        returns,
        threshold,
        smooth,
        step,
        rigidness,
        iterations,
    }
);

define_stage!(
    /// Density-based clustering (DBSCAN); writes a ClusterID dimension.
    DbscanFilter, "filters.dbscan", dbscan {
        min_points,
        eps,
        dimensions,
    }
);

define_stage!(
    /// Keep every step-th point.
    DecimationFilter, "filters.decimation", decimation {
        step,
        offset,
        limit,
    }
);

define_stage!(
    /// Triangulate the point view into a Delaunay mesh.
    DelaunayFilter, "filters.delaunay", delaunay {}
);

define_stage!(
    /// Filter points by deviation from a reference DEM raster.
    DemFilter, "filters.dem", dem {
        limits,
        raster,
        band,
    }
);

define_stage!(
    /// Split a point view into a fixed number of parts.
    DividerFilter, "filters.divider", divider {}
);

define_stage!(
    /// Write eigenvalues of each point neighborhood as dimensions.
    EigenvaluesFilter, "filters.eigenvalues", eigenvalues {
        knn,
        normalize,
    }
);

define_stage!(
    /// Extended Local Minimum noise marking for low outliers.
    ElmFilter, "filters.elm", elm {}
);

define_stage!(
    /// Estimate the rank of each point neighborhood.
    EstimateRankFilter, "filters.estimaterank", estimaterank {}
);

define_stage!(
    /// Rasterize mesh faces to a grid.
    FaceRasterFilter, "filters.faceraster", faceraster {
        resolution,
        mesh,
    }
);

define_stage!(
    /// Copy values between dimensions, e.g. `X => OriginalX`.
    FerryFilter, "filters.ferry", ferry {
        dimensions,
    }
);

define_stage!(
    /// Farthest-point sampling down to a target count.
    FpsFilter, "filters.fps", fps {
        count,
    }
);

define_stage!(
    /// Convert GpsTime between week seconds and adjusted standard time.
    GpsTimeConvertFilter, "filters.gpstimeconvert", gpstimeconvert {
        conversion,
    }
);

define_stage!(
    /// Greedy projection triangulation over local neighborhoods.
    GreedyProjectionFilter, "filters.greedyprojection", greedyprojection {
        multiplier,
        radius,
        num_neighbors,
        min_angle,
        max_angle,
        eps_angle,
    }
);

define_stage!(
    /// Split the point view into groups sharing a dimension value.
    GroupbyFilter, "filters.groupby", groupby {}
);

define_stage!(
    /// Height above ground via Delaunay interpolation of ground returns.
    HagDelaunayFilter, "filters.hag_delaunay", hag_delaunay {
        allow_extrapolation,
    }
);

define_stage!(
    /// Height above ground sampled from a DEM raster band.
    HagDemFilter, "filters.hag_dem", hag_dem {
        band,
        zero_ground,
    }
);

define_stage!(
    /// Height above ground from nearest ground-classified neighbors.
    HagNnFilter, "filters.hag_nn", hag_nn {
        max_distance,
        allow_extrapolation,
    }
);

define_stage!(
    /// Pass through only the first `count` points.
    HeadFilter, "filters.head", head {
        count,
    }
);

define_stage!(
    /// Compute a hexagonal boundary tessellation of the point view.
    HexbinFilter, "filters.hexbin", hexbin {
        sample_size,
        threshold,
        precision,
        preserve_topology,
        smooth,
    }
);

define_stage!(
    /// Iterative closest point registration against a fixed view.
    IcpFilter, "filters.icp", icp {
        max_iter,
        max_similar,
        mse_abs,
        rt,
        tt,
    }
);

define_stage!(
    /// Gather basic metadata (bounds, srs, dimension list) as it streams by.
    InfoFilter, "filters.info", info {}
);

define_stage!(
    /// Cull points outside the interquartile range of a dimension.
    IqrFilter, "filters.iqr", iqr {
        k,
        dimension,
    }
);

define_stage!(
    /// Run a Julia function over the point view.
    JuliaFilter, "filters.julia", julia {
        script,
        source,
        module,
        function,
    }
);

define_stage!(
    /// Segment individual tree crowns (Li et al. top-down).
    LitreeFilter, "filters.litree", litree {
        min_points,
        min_height,
        radius,
    }
);

define_stage!(
    /// Lloyd's k-means clustering over selected dimensions.
    LloydKmeansFilter, "filters.lloydkmeans", lloydkmeans {
        k,
        maxiters,
        dimensions,
    }
);

define_stage!(
    /// Reduce the view to the point holding a dimension's min or max.
    LocateFilter, "filters.locate", locate {
        minmax,
    }
);

define_stage!(
    /// Local outlier factor scores per point.
    LofFilter, "filters.lof", lof {}
);

define_stage!(
    /// Cull by median absolute deviation of a dimension.
    MadFilter, "filters.mad", mad {
        k,
    }
);

define_stage!(
    /// Run a MATLAB function over the point view.
    MatlabFilter, "filters.matlab", matlab {
        script,
        source,
        add_dimension,
        struct_ => "struct",
    }
);

define_stage!(
    /// Merge multiple input views into one.
    MergeFilter, "filters.merge", merge {}
);

define_stage!(
    /// Minimum bounding sphere radius of each point neighborhood.
    MiniballFilter, "filters.miniball", miniball {
        knn,
    }
);

define_stage!(
    /// Cull points using a MongoDB-style query expression.
    MongoFilter, "filters.mongo", mongo {
        expression,
    }
);

define_stage!(
    /// Reorder points along a Morton (Z-order) curve.
    MortonOrderFilter, "filters.mortonorder", mortonorder {}
);

define_stage!(
    /// Re-classify points from the consensus of their neighbors.
    NeighborClassifierFilter, "filters.neighborclassifier", neighborclassifier {
        processed,
    }
);

define_stage!(
    /// Distance to the nearest neighbor, written as a dimension.
    NndistanceFilter, "filters.nndistance", nndistance {}
);

define_stage!(
    /// Estimate surface normals and curvature per point.
    NormalFilter, "filters.normal", normal {}
);

define_stage!(
    /// Per-point optimal neighborhood size via eigenentropy.
    OptimalNeighborhoodFilter, "filters.optimalneighborhood", optimalneighborhood {
        min_k,
        max_k,
    }
);

define_stage!(
    /// Mark statistical or radius outliers as noise.
    OutlierFilter, "filters.outlier", outlier {
        method,
    }
);

define_stage!(
    /// Burn attribute values from a vector layer onto points.
    OverlayFilter, "filters.overlay", overlay {
        dimension,
        column,
        layer,
    }
);

define_stage!(
    /// Plane-fit residual per point neighborhood.
    PlaneFitFilter, "filters.planefit", planefit {
        knn,
        threads,
    }
);

define_stage!(
    /// Progressive morphological filter ground classification.
    PmfFilter, "filters.pmf", pmf {}
);

define_stage!(
    /// Poisson surface reconstruction over the point view.
    PoissonFilter, "filters.poisson", poisson {
        density,
        depth,
    }
);

define_stage!(
    /// Apply a PROJ pipeline expression to coordinates.
    ProjPipelineFilter, "filters.projpipeline", projpipeline {}
);

define_stage!(
    /// Run a Python function over the point view.
    ///
    /// Either `script` (a file) or `source` (inline code) supplies the
    /// `function` inside `module`.
    PythonFilter, "filters.python", python {
        script,
        source,
        module,
        function,
    }
);

define_stage!(
    /// Point counts within a fixed radius, written as a dimension.
    RadialDensityFilter, "filters.radialdensity", radialdensity {}
);

define_stage!(
    /// Shuffle point order pseudo-randomly.
    RandomizeFilter, "filters.randomize", randomize {}
);

define_stage!(
    /// Keep points whose dimensions fall inside range criteria.
    ///
    /// `limits` takes the `Dimension[start:end],...` syntax, e.g.
    /// `Z[0:100],Classification[2:2]`.
    RangeFilter, "filters.range", range {
        limits,
    }
);

define_stage!(
    /// Fraction of neighbors that consider a point a neighbor in return.
    ReciprocityFilter, "filters.reciprocity", reciprocity {
        knn,
    }
);

define_stage!(
    /// Poisson-disk style dart throwing with a relaxing radius.
    RelaxationDartThrowingFilter, "filters.relaxationdartthrowing", relaxationdartthrowing {
        decay,
        radius,
        count,
        shuffle,
        seed,
    }
);

define_stage!(
    /// Reproject coordinates between spatial reference systems.
    ReprojectionFilter, "filters.reprojection", reprojection {
        in_srs,
        out_srs,
        in_axis_ordering,
        out_axis_ordering,
        error_on_failure,
    }
);

define_stage!(
    /// Split the view by return characteristics (first/last/only/...).
    ReturnsFilter, "filters.returns", returns {}
);

define_stage!(
    /// Poisson sampling to a minimum point spacing.
    SampleFilter, "filters.sample", sample {
        cell,
        radius,
    }
);

define_stage!(
    /// Split the view whenever the scan direction flips.
    SeparateScanlineFilter, "filters.separatescanline", separatescanline {}
);

define_stage!(
    /// Run a shell command at this point of the pipeline.
    ShellFilter, "filters.shell", shell {
        command,
    }
);

define_stage!(
    /// Skewness-balancing ground separation.
    SkewnessBalancingFilter, "filters.skewnessbalancing", skewnessbalancing {}
);

define_stage!(
    /// Simple Morphological Filter ground classification.
    SmrfFilter, "filters.smrf", smrf {
        cell,
        classbits,
        cut,
        dir,
        ignore,
        returns,
        scalar,
        slope,
        threshold,
        window,
    }
);

define_stage!(
    /// Sort points by a dimension.
    SortFilter, "filters.sort", sort {}
);

define_stage!(
    /// Tile points into square chips with optional overlapping buffer.
    SplitterFilter, "filters.splitter", splitter {
        length,
        buffer,
    }
);

define_stage!(
    /// Accumulate per-dimension statistics into stage metadata.
    StatsFilter, "filters.stats", stats {
        dimensions,
        count,
        advanced,
    }
);

define_stage!(
    /// Invoke an embedding-application callback per streamed point.
    StreamCallbackFilter, "filters.streamcallback", streamcallback {}
);

define_stage!(
    /// Pass through only the last `count` points.
    TailFilter, "filters.tail", tail {
        count,
    }
);

define_stage!(
    /// TEASER++ registration against a fixed view.
    TeaserFilter, "filters.teaser", teaser {
        nr,
        fr,
        fpfh,
    }
);

define_stage!(
    /// Estimate a scanner trajectory from a point stream.
    TrajectoryFilter, "filters.trajectory", trajectory {
        dtr,
        dst,
        minsep,
        tblock,
        tout,
    }
);

define_stage!(
    /// Apply a 4x4 homogeneous transformation matrix.
    TransformationFilter, "filters.transformation", transformation {
        invert,
    }
);

define_stage!(
    /// Keep the point nearest each voxel center.
    VoxelCenterNearestNeighborFilter, "filters.voxelcenternearestneighbor",
    voxelcenternearestneighbor {
        cell,
    }
);

define_stage!(
    /// Keep the point nearest each voxel centroid.
    VoxelCentroidNearestNeighborFilter, "filters.voxelcentroidnearestneighbor",
    voxelcentroidnearestneighbor {
        cell,
    }
);

define_stage!(
    /// Thin to one point per voxel, by center or first-in.
    VoxelDownsizeFilter, "filters.voxeldownsize", voxeldownsize {
        cell,
        mode,
    }
);

define_stage!(
    /// Smooth Z with a median of the vertical neighborhood.
    ZsmoothFilter, "filters.zsmooth", zsmooth {
        radius,
        medianpercent,
        dim,
    }
);
