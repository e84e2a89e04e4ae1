//! ## Derivation
//!
//! Let $\mathbf{v} = t\mathbf{x}$ be the motion parameters
//! $\mathbf{x} = \left[w, s, h, r, v_x, v_y\right]$ scaled by the elapsed time,
//! and let ${[\cdot]}\_{\wedge}$ be the operator that maps it to an element of
//! the affine Lie algebra $\mathfrak{aff}(2)$ in homogeneous form:
//!
//! $$
//! G = [\mathbf{v}]\_{\wedge} =
//! \begin{bmatrix}
//! v_{2} + v_{3} & v_{4} - v_{1} & v_{5} \\\\
//! v_{4} + v_{1} & v_{2} - v_{3} & v_{6} \\\\
//! 0 & 0 & 0
//! \end{bmatrix}
//! $$
//!
//! The warp of a point $\mathbf{c}$ over $[0, t]$ is
//! $\exp(G)\dot{\mathbf{c}}$, where the dot denotes the homogeneous operator
//! $\dot{\mathbf{c}} = \left[c_1, c_2, 1\right]$. For small $t$ we keep only the
//! first order term of the series,
//!
//! $$
//! T = I + G, \\;\\; \mathbf{c}' = \left[T \dot{\mathbf{c}}\right]\_{1:2}.
//! $$
//!
//! ### Jacobian with respect to the parameters
//!
//! $T$ is linear in $\mathbf{x}$, so
//!
//! $$
//! \frac{\partial \mathbf{c}'}{\partial x_i}
//! = \left[\frac{\partial G}{\partial x_i} \dot{\mathbf{c}}\right]\_{1:2},
//! $$
//!
//! with
//!
//! $$
//! \frac{\partial G}{\partial w} = t\begin{bmatrix}
//! 0 & -1 & 0 \\\\
//! 1 & 0 & 0 \\\\
//! 0 & 0 & 0
//! \end{bmatrix},\\;
//! \frac{\partial G}{\partial s} = t\begin{bmatrix}
//! 1 & 0 & 0 \\\\
//! 0 & 1 & 0 \\\\
//! 0 & 0 & 0
//! \end{bmatrix},\\;
//! \frac{\partial G}{\partial h} = t\begin{bmatrix}
//! 1 & 0 & 0 \\\\
//! 0 & -1 & 0 \\\\
//! 0 & 0 & 0
//! \end{bmatrix},
//! $$
//!
//! $$
//! \frac{\partial G}{\partial r} = t\begin{bmatrix}
//! 0 & 1 & 0 \\\\
//! 1 & 0 & 0 \\\\
//! 0 & 0 & 0
//! \end{bmatrix},\\;
//! \frac{\partial G}{\partial v_x} = t\begin{bmatrix}
//! 0 & 0 & 1 \\\\
//! 0 & 0 & 0 \\\\
//! 0 & 0 & 0
//! \end{bmatrix},\\;
//! \frac{\partial G}{\partial v_y} = t\begin{bmatrix}
//! 0 & 0 & 0 \\\\
//! 0 & 0 & 1 \\\\
//! 0 & 0 & 0
//! \end{bmatrix}.
//! $$
//!
//! Stacking the columns gives
//!
//! $$
//! \frac{\partial \mathbf{c}'}{\partial \mathbf{x}} = t
//! \begin{bmatrix}
//! -c_{2} & c_{1} & c_{1} & c_{2} & 1 & 0 \\\\
//! c_{1} & c_{2} & -c_{2} & c_{1} & 0 & 1
//! \end{bmatrix}.
//! $$
//!
//! ### Jacobian with respect to the point
//!
//! $$
//! \frac{\partial \mathbf{c}'}{\partial \mathbf{c}} = \left[T\right]\_{1:2, 1:2}
//! = I + \begin{bmatrix}
//! v_{2} + v_{3} & v_{4} - v_{1} \\\\
//! v_{4} + v_{1} & v_{2} - v_{3}
//! \end{bmatrix}.
//! $$
//!
//! ### Perturbation matrix
//!
//! The uncertainty query also returns, with $\mathbf{c}_t = t\mathbf{c}$,
//!
//! $$
//! P = \begin{bmatrix}
//! -c_{t,2} & c_{t,1} & t & 0 & c_{t,1} & c_{t,2} \\\\
//! c_{t,1} & c_{t,2} & 0 & t & -c_{t,2} & c_{t,1}
//! \end{bmatrix}
//! $$
//!
//! which holds the same first order displacements as the parameter Jacobian
//! with the columns ordered $\left[w, s, v_x, v_y, h, r\right]$. It is built
//! directly from $\mathbf{c}$ and $t$ rather than by permuting
//! $\partial \mathbf{c}' / \partial \mathbf{x}$.
