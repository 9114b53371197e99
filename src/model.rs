//! Frame model - 2D structural domain container and its analyses

use std::collections::BTreeMap;

use log::{debug, info};
use nalgebra::SymmetricEigen;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisOptions, AnalysisType, SystemKind};
use crate::elements::{
    CoordTransf, Dof, ElasticBeamColumn, EqualDof, Fixity, MassType, NodalMass, Node, DOF_PER_NODE,
};
use crate::error::{FEAError, FEAResult};
use crate::loads::{LoadPattern, NodeLoad, TimeSeries};
use crate::math::{self, Mat, MatrixAssembler, SkylineSolver, SparseMatrixBuilder, Vec as FEVec, Vec6};
use crate::results::{AnalysisSummary, ElementForces, ModalResults, NodeDisplacement, Reactions};

/// Equation numbers for every nodal DOF; `None` marks a fixed DOF
#[derive(Debug, Clone)]
pub(crate) struct DofNumbering {
    equations: BTreeMap<u32, [Option<usize>; DOF_PER_NODE]>,
    num_equations: usize,
}

impl DofNumbering {
    fn node(&self, tag: u32) -> [Option<usize>; DOF_PER_NODE] {
        self.equations.get(&tag).copied().unwrap_or([None; DOF_PER_NODE])
    }

    fn element(&self, ele: &ElasticBeamColumn) -> [Option<usize>; 6] {
        let i = self.node(ele.i_node);
        let j = self.node(ele.j_node);
        [i[0], i[1], i[2], j[0], j[1], j[2]]
    }

    fn scatter<A: MatrixAssembler>(&self, eqs: &[Option<usize>; 6], k: &math::Mat6, target: &mut A) {
        for (a, ea) in eqs.iter().enumerate() {
            let Some(row) = ea else { continue };
            for (b, eb) in eqs.iter().enumerate() {
                if let Some(col) = eb {
                    target.add(*row, *col, k[(a, b)]);
                }
            }
        }
    }
}

/// The 2D frame finite element model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameModel {
    /// Nodes by tag
    pub nodes: BTreeMap<u32, Node>,
    /// Single-point fixities by node tag
    pub fixities: BTreeMap<u32, Fixity>,
    /// Equal-DOF constraints in definition order
    pub constraints: Vec<EqualDof>,
    /// Lumped nodal masses by node tag
    pub masses: BTreeMap<u32, NodalMass>,
    /// Coordinate transformations by tag
    pub transfs: BTreeMap<u32, CoordTransf>,
    /// Frame elements by tag
    pub elements: BTreeMap<u32, ElasticBeamColumn>,
    /// Time series by tag
    pub time_series: BTreeMap<u32, TimeSeries>,
    /// Load patterns by tag
    pub patterns: BTreeMap<u32, LoadPattern>,

    /// Domain pseudo-time
    #[serde(skip)]
    time: f64,

    /// Committed load-control steps since the last wipe
    #[serde(skip)]
    static_steps: usize,

    /// Latest eigen analysis results
    #[serde(skip)]
    modal: Option<ModalResults>,

    /// Last analysis performed
    #[serde(skip)]
    solution: Option<AnalysisType>,
}

impl Default for FrameModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            fixities: BTreeMap::new(),
            constraints: Vec::new(),
            masses: BTreeMap::new(),
            transfs: BTreeMap::new(),
            elements: BTreeMap::new(),
            time_series: BTreeMap::new(),
            patterns: BTreeMap::new(),
            time: 0.0,
            static_steps: 0,
            modal: None,
            solution: None,
        }
    }

    /// Remove every component and all analysis state
    pub fn wipe(&mut self) {
        *self = Self::new();
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node to the model
    pub fn add_node(&mut self, tag: u32, node: Node) -> FEAResult<()> {
        if self.nodes.contains_key(&tag) {
            return Err(FEAError::DuplicateTag { kind: "node", tag });
        }
        if !node.x.is_finite() || !node.y.is_finite() {
            return Err(FEAError::InvalidGeometry(format!(
                "node {tag} has non-finite coordinates"
            )));
        }
        self.nodes.insert(tag, node);
        self.solution = None;
        Ok(())
    }

    /// Restrain DOFs at a node; repeated calls accumulate restraints
    pub fn fix(&mut self, tag: u32, fixity: Fixity) -> FEAResult<()> {
        self.require_node(tag)?;
        let merged = self.fixities.get(&tag).copied().unwrap_or_default().merge(fixity);
        self.fixities.insert(tag, merged);
        self.solution = None;
        Ok(())
    }

    /// Tie DOFs of `constrained` to those of `retained`
    pub fn equal_dof(&mut self, retained: u32, constrained: u32, dofs: &[Dof]) -> FEAResult<()> {
        self.require_node(retained)?;
        self.require_node(constrained)?;
        if retained == constrained {
            return Err(FEAError::InvalidInput(format!(
                "node {retained} cannot be constrained to itself"
            )));
        }
        if dofs.is_empty() {
            return Err(FEAError::InvalidInput(
                "equal-DOF constraint needs at least one DOF".to_string(),
            ));
        }
        self.constraints.push(EqualDof::new(retained, constrained, dofs));
        self.solution = None;
        Ok(())
    }

    /// Set the lumped mass at a node
    pub fn set_mass(&mut self, tag: u32, mass: NodalMass) -> FEAResult<()> {
        self.require_node(tag)?;
        if mass.as_array().iter().any(|m| *m < 0.0 || !m.is_finite()) {
            return Err(FEAError::InvalidInput(format!(
                "node {tag} mass must be finite and non-negative"
            )));
        }
        self.masses.insert(tag, mass);
        self.solution = None;
        Ok(())
    }

    /// Add a coordinate transformation
    pub fn add_coord_transf(&mut self, tag: u32, transf: CoordTransf) -> FEAResult<()> {
        if self.transfs.contains_key(&tag) {
            return Err(FEAError::DuplicateTag { kind: "transformation", tag });
        }
        self.transfs.insert(tag, transf);
        Ok(())
    }

    /// Add an element to the model
    pub fn add_element(&mut self, tag: u32, element: ElasticBeamColumn) -> FEAResult<()> {
        self.require_node(element.i_node)?;
        self.require_node(element.j_node)?;
        if !self.transfs.contains_key(&element.transf) {
            return Err(FEAError::TransfNotFound(element.transf));
        }
        if self.elements.contains_key(&tag) {
            return Err(FEAError::DuplicateTag { kind: "element", tag });
        }
        if !(element.a > 0.0 && element.e > 0.0 && element.iz > 0.0) {
            return Err(FEAError::InvalidInput(format!(
                "element {tag} needs positive A, E and I"
            )));
        }
        if element.mass_per_length < 0.0 {
            return Err(FEAError::InvalidInput(format!(
                "element {tag} has negative mass per length"
            )));
        }

        self.elements.insert(tag, element);
        self.solution = None;
        Ok(())
    }

    /// Add a time series
    pub fn add_time_series(&mut self, tag: u32, series: TimeSeries) -> FEAResult<()> {
        if self.time_series.contains_key(&tag) {
            return Err(FEAError::DuplicateTag { kind: "time series", tag });
        }
        self.time_series.insert(tag, series);
        Ok(())
    }

    /// Add a load pattern, with any loads it already carries
    pub fn add_load_pattern(&mut self, pattern: LoadPattern) -> FEAResult<()> {
        if self.patterns.contains_key(&pattern.tag) {
            return Err(FEAError::DuplicateTag { kind: "load pattern", tag: pattern.tag });
        }
        if !self.time_series.contains_key(&pattern.time_series) {
            return Err(FEAError::TimeSeriesNotFound(pattern.time_series));
        }
        for (node, _) in &pattern.loads {
            self.require_node(*node)?;
        }
        self.patterns.insert(pattern.tag, pattern);
        self.solution = None;
        Ok(())
    }

    /// Add a nodal load to an existing pattern
    pub fn add_node_load(&mut self, pattern: u32, node: u32, load: NodeLoad) -> FEAResult<()> {
        self.require_node(node)?;
        let pattern = self
            .patterns
            .get_mut(&pattern)
            .ok_or(FEAError::PatternNotFound(pattern))?;
        pattern.loads.push((node, load));
        self.solution = None;
        Ok(())
    }

    fn require_node(&self, tag: u32) -> FEAResult<&Node> {
        self.nodes.get(&tag).ok_or(FEAError::NodeNotFound(tag))
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Run the analysis described by `options`
    pub fn analyze(&mut self, options: &AnalysisOptions) -> FEAResult<()> {
        match options.analysis_type {
            AnalysisType::Static => self.analyze_static(options),
            AnalysisType::Eigen => self.eigen(options.num_modes).map(|_| ()),
        }
    }

    /// Compute the lowest `num_modes` eigenvalues λ = ω² of K φ = λ M φ
    ///
    /// Mode shapes are mass-normalized and stored on the nodes.
    pub fn eigen(&mut self, num_modes: usize) -> FEAResult<Vec<f64>> {
        if num_modes == 0 {
            return Err(FEAError::InvalidInput("eigen needs at least one mode".to_string()));
        }

        self.prepare_model()?;
        let numbering = self.number_dofs()?;
        let n = numbering.num_equations;
        if n == 0 {
            return Err(FEAError::EigenFailed("no free degrees of freedom".to_string()));
        }

        let mut k = Mat::zeros(n, n);
        self.assemble_stiffness(&numbering, &mut k)?;
        let m = self.assemble_mass(&numbering)?;

        let massed = (0..n).filter(|&i| m[(i, i)] > 0.0).count();
        if massed == 0 {
            return Err(FEAError::EigenFailed("model has no mass".to_string()));
        }
        if num_modes > massed {
            return Err(FEAError::EigenFailed(format!(
                "requested {num_modes} modes but only {massed} DOFs carry mass"
            )));
        }

        // Flexibility form: C = L⁻¹ M L⁻ᵀ with K = L Lᵀ has eigenvalues μ = 1/λ,
        // massless DOFs give μ = 0
        let chol = k.cholesky().ok_or(FEAError::SingularMatrix)?;
        let l = chol.l();
        let l_inv_m = l.solve_lower_triangular(&m).ok_or(FEAError::SingularMatrix)?;
        let c = l
            .solve_lower_triangular(&l_inv_m.transpose())
            .ok_or(FEAError::SingularMatrix)?;
        let c = (&c + c.transpose()) * 0.5;

        let eig = SymmetricEigen::new(c);
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| eig.eigenvalues[b].total_cmp(&eig.eigenvalues[a]));

        // Below this, μ is round-off from massless DOFs
        let mu_floor = eig.eigenvalues[order[0]].max(0.0) * n as f64 * f64::EPSILON;

        let l_t = l.transpose();
        let mut eigenvalues = Vec::with_capacity(num_modes);
        let mut shapes: Vec<FEVec> = Vec::with_capacity(num_modes);

        for (mode, &col) in order.iter().take(num_modes).enumerate() {
            let mu = eig.eigenvalues[col];
            if mu <= mu_floor {
                return Err(FEAError::EigenFailed(format!(
                    "mode {} has no participating mass",
                    mode + 1
                )));
            }

            let psi: FEVec = eig.eigenvectors.column(col).into_owned();
            let mut phi = l_t.solve_upper_triangular(&psi).ok_or(FEAError::SingularMatrix)?;
            phi /= mu.sqrt();

            // Largest component positive
            let peak = phi
                .iter()
                .copied()
                .fold(0.0_f64, |acc, v| if v.abs() > acc.abs() { v } else { acc });
            if peak < 0.0 {
                phi.neg_mut();
            }

            eigenvalues.push(1.0 / mu);
            shapes.push(phi);
        }

        for (tag, node) in self.nodes.iter_mut() {
            let eqs = numbering.node(*tag);
            node.eigenvectors = shapes
                .iter()
                .map(|phi| {
                    let mut v = [0.0; DOF_PER_NODE];
                    for (d, eq) in eqs.iter().enumerate() {
                        if let Some(eq) = eq {
                            v[d] = phi[*eq];
                        }
                    }
                    v
                })
                .collect();
        }

        info!(
            "eigen analysis: {} modes from {} equations ({} with mass)",
            num_modes, n, massed
        );
        debug!("eigenvalues: {:?}", eigenvalues);

        self.modal = Some(ModalResults {
            eigenvalues: eigenvalues.clone(),
        });
        self.solution = Some(AnalysisType::Eigen);
        Ok(eigenvalues)
    }

    /// Run a load-controlled linear static analysis
    ///
    /// Each step advances the domain pseudo-time by `load_increment`, forms the
    /// load vector from every pattern at its series factor and commits the
    /// resulting state.
    pub fn analyze_static(&mut self, options: &AnalysisOptions) -> FEAResult<()> {
        if options.num_steps == 0 {
            return Err(FEAError::InvalidInput("static analysis needs at least one step".to_string()));
        }
        if !options.load_increment.is_finite() {
            return Err(FEAError::InvalidInput("load increment must be finite".to_string()));
        }

        self.prepare_model()?;
        let numbering = self.number_dofs()?;
        if numbering.num_equations == 0 {
            return Err(FEAError::InvalidInput("no free degrees of freedom".to_string()));
        }

        for step in 0..options.num_steps {
            self.time += options.load_increment;
            let p = self.build_load_vector(&numbering)?;
            let u = self.solve_system(&numbering, &p, options.system)?;
            self.commit_state(&numbering, &u)?;
            self.static_steps += 1;
            debug!(
                "load step {}/{}: time = {}, |P| = {:.6e}",
                step + 1,
                options.num_steps,
                self.time,
                p.norm()
            );
        }

        info!(
            "static analysis: {} step(s), {} equations, {:?} system",
            options.num_steps, numbering.num_equations, options.system
        );
        self.solution = Some(AnalysisType::Static);
        Ok(())
    }

    /// Prepare model for analysis (element lengths, transformation checks)
    fn prepare_model(&mut self) -> FEAResult<()> {
        for (tag, element) in self.elements.iter_mut() {
            let i_node = self.nodes.get(&element.i_node).ok_or(FEAError::NodeNotFound(element.i_node))?;
            let j_node = self.nodes.get(&element.j_node).ok_or(FEAError::NodeNotFound(element.j_node))?;
            let length = i_node.distance_to(j_node);

            if length < 1e-10 {
                return Err(FEAError::InvalidGeometry(format!(
                    "element {} has zero length: i={}, j={}",
                    tag, element.i_node, element.j_node
                )));
            }
            if !self.transfs.contains_key(&element.transf) {
                return Err(FEAError::TransfNotFound(element.transf));
            }

            element.length = Some(length);
        }
        Ok(())
    }

    /// Number the free equations
    ///
    /// Fixed DOFs get no equation. DOFs tied by an equal-DOF constraint share
    /// the equation of their retained node, following chains of constraints.
    pub(crate) fn number_dofs(&self) -> FEAResult<DofNumbering> {
        let mut tied: BTreeMap<(u32, usize), u32> = BTreeMap::new();
        for constraint in &self.constraints {
            for dof in &constraint.dofs {
                let key = (constraint.constrained, dof.index());
                if tied.insert(key, constraint.retained).is_some() {
                    return Err(FEAError::InvalidInput(format!(
                        "node {} {:?} is constrained more than once",
                        constraint.constrained, dof
                    )));
                }
            }
        }

        let mut equations: BTreeMap<u32, [Option<usize>; DOF_PER_NODE]> = BTreeMap::new();
        let mut next = 0;
        for tag in self.nodes.keys() {
            let fixed = self.fixities.get(tag).copied().unwrap_or_default().as_array();
            let mut entry = [None; DOF_PER_NODE];
            for d in 0..DOF_PER_NODE {
                if fixed[d] || tied.contains_key(&(*tag, d)) {
                    continue;
                }
                entry[d] = Some(next);
                next += 1;
            }
            equations.insert(*tag, entry);
        }

        for (&(tag, d), &retained) in &tied {
            if self.fixities.get(&tag).is_some_and(|f| f.as_array()[d]) {
                return Err(FEAError::InvalidInput(format!(
                    "node {tag} {:?} is both fixed and constrained",
                    Dof::ALL[d]
                )));
            }

            let mut current = retained;
            let mut hops = 0;
            while let Some(&up) = tied.get(&(current, d)) {
                current = up;
                hops += 1;
                if hops > tied.len() {
                    return Err(FEAError::InvalidInput(format!(
                        "cyclic equal-DOF constraints through node {tag}"
                    )));
                }
            }

            let shared = equations.get(&current).and_then(|eqs| eqs[d]);
            if let Some(entry) = equations.get_mut(&tag) {
                entry[d] = shared;
            }
        }

        debug!(
            "numbered {} equations for {} nodes ({} tied DOFs)",
            next,
            self.nodes.len(),
            tied.len()
        );

        Ok(DofNumbering {
            equations,
            num_equations: next,
        })
    }

    fn element_transformation(&self, element: &ElasticBeamColumn) -> FEAResult<math::Mat6> {
        let i_node = self.require_node(element.i_node)?;
        let j_node = self.require_node(element.j_node)?;
        Ok(math::frame_transformation_matrix(&i_node.coords(), &j_node.coords()))
    }

    /// Local stiffness including P-Delta terms of the committed axial force
    fn element_local_stiffness(&self, element: &ElasticBeamColumn) -> math::Mat6 {
        let length = element.length.unwrap_or(0.0);
        let mut k = math::frame_local_stiffness(element.e, element.a, element.iz, length);
        let pdelta = self
            .transfs
            .get(&element.transf)
            .is_some_and(|t| t.has_geometric_stiffness());
        if pdelta {
            k += math::frame_geometric_stiffness(element.axial_force(), length);
        }
        k
    }

    /// Assemble the global stiffness of all elements into `target`
    fn assemble_stiffness<A: MatrixAssembler>(&self, numbering: &DofNumbering, target: &mut A) -> FEAResult<()> {
        for element in self.elements.values() {
            let t = self.element_transformation(element)?;
            let k_global = math::to_global(&self.element_local_stiffness(element), &t);
            numbering.scatter(&numbering.element(element), &k_global, target);
        }
        Ok(())
    }

    /// Assemble the global mass matrix (nodal plus element mass)
    fn assemble_mass(&self, numbering: &DofNumbering) -> FEAResult<Mat> {
        let n = numbering.num_equations;
        let mut m = Mat::zeros(n, n);

        for (tag, mass) in &self.masses {
            let eqs = numbering.node(*tag);
            for (d, value) in mass.as_array().iter().enumerate() {
                if let Some(eq) = eqs[d] {
                    m[(eq, eq)] += value;
                }
            }
        }

        for element in self.elements.values() {
            if element.mass_per_length <= 0.0 {
                continue;
            }
            let length = element.length.unwrap_or(0.0);
            let m_global = match element.mass_type {
                // Equal translational terms are invariant under rotation
                MassType::Lumped => math::frame_lumped_mass(element.mass_per_length, length),
                MassType::Consistent => {
                    let t = self.element_transformation(element)?;
                    math::to_global(&math::frame_consistent_mass(element.mass_per_length, length), &t)
                }
            };
            numbering.scatter(&numbering.element(element), &m_global, &mut m);
        }

        Ok(m)
    }

    /// Build the global load vector at the current pseudo-time
    fn build_load_vector(&self, numbering: &DofNumbering) -> FEAResult<FEVec> {
        let mut p = FEVec::zeros(numbering.num_equations);

        for pattern in self.patterns.values() {
            let factor = self.pattern_factor(pattern)?;
            if factor == 0.0 {
                continue;
            }
            for (node, load) in &pattern.loads {
                let eqs = numbering.node(*node);
                for (d, value) in load.scaled(factor).as_array().iter().enumerate() {
                    if let Some(eq) = eqs[d] {
                        p[eq] += value;
                    }
                }
            }
        }

        Ok(p)
    }

    fn pattern_factor(&self, pattern: &LoadPattern) -> FEAResult<f64> {
        let series = self
            .time_series
            .get(&pattern.time_series)
            .ok_or(FEAError::TimeSeriesNotFound(pattern.time_series))?;
        Ok(series.factor_at(self.time))
    }

    /// Solve K u = P on the free equations
    fn solve_system(&self, numbering: &DofNumbering, p: &FEVec, system: SystemKind) -> FEAResult<FEVec> {
        let n = numbering.num_equations;
        match system {
            SystemKind::FullGeneral => {
                let mut k = Mat::zeros(n, n);
                self.assemble_stiffness(numbering, &mut k)?;
                math::solve_linear_system(&k, p).ok_or(FEAError::SingularMatrix)
            }
            SystemKind::ProfileSpd => {
                let mut builder = SparseMatrixBuilder::new(n);
                self.assemble_stiffness(numbering, &mut builder)?;
                let mut solver = SkylineSolver::from_csr(&builder.to_csr());
                debug!("profile system: {} entries, {} stored", builder.nnz(), solver.profile_len());
                solver.factorize()?;
                solver.solve(p)
            }
        }
    }

    /// Commit displacements, element end forces and reactions
    fn commit_state(&mut self, numbering: &DofNumbering, u: &FEVec) -> FEAResult<()> {
        for (tag, node) in self.nodes.iter_mut() {
            let eqs = numbering.node(*tag);
            for (d, eq) in eqs.iter().enumerate() {
                node.displacement[d] = eq.map_or(0.0, |eq| u[eq]);
            }
            node.reaction = [0.0; DOF_PER_NODE];
        }

        let mut forces: Vec<(u32, [f64; 6], [f64; 6])> = Vec::with_capacity(self.elements.len());
        for (tag, element) in &self.elements {
            let d_i = self.require_node(element.i_node)?.displacement;
            let d_j = self.require_node(element.j_node)?.displacement;
            let d_global = Vec6::from_iterator(d_i.iter().chain(d_j.iter()).copied());

            let t = self.element_transformation(element)?;
            let d_local = t * d_global;
            let f_local = self.element_local_stiffness(element) * d_local;
            let f_global = t.transpose() * f_local;

            let mut local = [0.0; 6];
            let mut global = [0.0; 6];
            local.copy_from_slice(f_local.as_slice());
            global.copy_from_slice(f_global.as_slice());
            forces.push((*tag, local, global));
        }

        let mut resisting: BTreeMap<u32, [f64; DOF_PER_NODE]> = BTreeMap::new();
        for (tag, local, global) in forces {
            if let Some(element) = self.elements.get_mut(&tag) {
                element.local_force = local;
                element.global_force = global;
                for (node, offset) in [(element.i_node, 0), (element.j_node, 3)] {
                    let sum = resisting.entry(node).or_insert([0.0; DOF_PER_NODE]);
                    for d in 0..DOF_PER_NODE {
                        sum[d] += global[offset + d];
                    }
                }
            }
        }

        // Reaction = resisting force - applied load on restrained DOFs
        let mut applied: BTreeMap<u32, [f64; DOF_PER_NODE]> = BTreeMap::new();
        for pattern in self.patterns.values() {
            let factor = self.pattern_factor(pattern)?;
            for (node, load) in &pattern.loads {
                let sum = applied.entry(*node).or_insert([0.0; DOF_PER_NODE]);
                for (d, value) in load.scaled(factor).as_array().iter().enumerate() {
                    sum[d] += value;
                }
            }
        }

        for (tag, fixity) in &self.fixities {
            let mask = fixity.as_array();
            let r = resisting.get(tag).copied().unwrap_or([0.0; DOF_PER_NODE]);
            let f = applied.get(tag).copied().unwrap_or([0.0; DOF_PER_NODE]);
            if let Some(node) = self.nodes.get_mut(tag) {
                for d in 0..DOF_PER_NODE {
                    node.reaction[d] = if mask[d] { r[d] - f[d] } else { 0.0 };
                }
            }
        }

        Ok(())
    }

    // ========================
    // Result Access Methods
    // ========================

    fn require_static(&self) -> FEAResult<()> {
        if self.static_steps == 0 {
            return Err(FEAError::NotAnalyzed);
        }
        Ok(())
    }

    /// Committed displacement of one DOF at a node
    pub fn node_disp(&self, tag: u32, dof: Dof) -> FEAResult<f64> {
        Ok(self.node_displacement(tag)?.as_dof(dof))
    }

    /// Committed displacement at a node
    pub fn node_displacement(&self, tag: u32) -> FEAResult<NodeDisplacement> {
        let node = self.require_node(tag)?;
        self.require_static()?;
        Ok(NodeDisplacement::from_array(node.displacement))
    }

    /// Support reactions at a node (zero on free DOFs)
    pub fn node_reaction(&self, tag: u32) -> FEAResult<Reactions> {
        let node = self.require_node(tag)?;
        self.require_static()?;
        Ok(Reactions::from_array(node.reaction))
    }

    /// Mode shape component; `mode` is one-based
    pub fn node_eigenvector(&self, tag: u32, mode: usize, dof: Dof) -> FEAResult<f64> {
        let node = self.require_node(tag)?;
        let computed = self.modal.as_ref().map_or(0, ModalResults::num_modes);
        if computed == 0 {
            return Err(FEAError::NotAnalyzed);
        }
        if mode == 0 || mode > computed {
            return Err(FEAError::InvalidInput(format!(
                "mode {mode} outside 1..={computed}"
            )));
        }
        node.eigenvector(mode - 1)
            .map(|v| v[dof.index()])
            .ok_or(FEAError::NotAnalyzed)
    }

    /// Element end forces in global axes [FX_i, FY_i, MZ_i, FX_j, FY_j, MZ_j]
    pub fn element_force(&self, tag: u32) -> FEAResult<ElementForces> {
        let element = self.elements.get(&tag).ok_or(FEAError::ElementNotFound(tag))?;
        self.require_static()?;
        Ok(ElementForces::from_array(element.global_force))
    }

    /// Element end forces in local axes [N_i, V_i, M_i, N_j, V_j, M_j]
    pub fn element_local_force(&self, tag: u32) -> FEAResult<ElementForces> {
        let element = self.elements.get(&tag).ok_or(FEAError::ElementNotFound(tag))?;
        self.require_static()?;
        Ok(ElementForces::from_array(element.local_force))
    }

    /// Eigenvalues of the latest eigen analysis
    pub fn eigenvalues(&self) -> FEAResult<&[f64]> {
        self.modal
            .as_ref()
            .map(|m| m.eigenvalues.as_slice())
            .ok_or(FEAError::NotAnalyzed)
    }

    /// Results of the latest eigen analysis
    pub fn modal_results(&self) -> Option<&ModalResults> {
        self.modal.as_ref()
    }

    /// Get analysis summary for the committed static state
    pub fn summary(&self) -> FEAResult<AnalysisSummary> {
        self.require_static()?;
        let numbering = self.number_dofs()?;

        let mut summary = AnalysisSummary {
            num_nodes: self.nodes.len(),
            num_elements: self.elements.len(),
            total_dofs: self.nodes.len() * DOF_PER_NODE,
            num_equations: numbering.num_equations,
            ..Default::default()
        };

        for (tag, node) in &self.nodes {
            let mag = NodeDisplacement::from_array(node.displacement).translation_magnitude();
            if mag > summary.max_displacement {
                summary.max_displacement = mag;
                summary.max_disp_node = *tag;
            }
        }

        for (tag, element) in &self.elements {
            let axial = element.local_force[3].abs();
            if axial > summary.max_axial {
                summary.max_axial = axial;
                summary.max_axial_element = *tag;
            }
            let moment = element.local_force[2].abs().max(element.local_force[5].abs());
            if moment > summary.max_moment {
                summary.max_moment = moment;
                summary.max_moment_element = *tag;
            }
        }

        Ok(summary)
    }

    /// Current domain pseudo-time
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Get the analysis type last performed
    pub fn solution_type(&self) -> Option<AnalysisType> {
        self.solution
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Number of independent equations after fixities and constraints
    pub fn num_equations(&self) -> FEAResult<usize> {
        Ok(self.number_dofs()?.num_equations)
    }

    /// Clear committed results while keeping the model definition
    pub fn reset_analysis(&mut self) {
        for node in self.nodes.values_mut() {
            node.clear_results();
        }
        for element in self.elements.values_mut() {
            element.clear_results();
        }
        self.time = 0.0;
        self.static_steps = 0;
        self.modal = None;
        self.solution = None;
    }
}
